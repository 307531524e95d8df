//! Release catalog for bridge images.
//!
//! Maps each [`BridgeType`] to the environments and channels notified when
//! a new image is published, the tag format of that image, and the
//! repository it is pushed to. See [`catalog`] for the tables.

pub mod catalog;
pub mod error;
pub mod model;
pub mod store;

pub use error::BridgemapError;
pub use model::{BridgeType, Channel, Environment, NotificationTarget, ResolvedTarget};
