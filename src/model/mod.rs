pub mod bridge;
pub mod config;
pub mod environment;
pub mod notification;

pub use bridge::BridgeType;
pub use config::{OutputFormat, Settings};
pub use environment::{Channel, Environment};
pub use notification::{NotificationTarget, ResolvedTarget};
