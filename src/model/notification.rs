use serde::Serialize;

use super::bridge::BridgeType;
use super::environment::{Channel, Environment};

/// One environment/channel pair to notify when a bridge image is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTarget {
    pub environment: Environment,
    pub channel: Channel,
    /// Bridge the notification is filed under, when it differs from the
    /// table key (e.g. a v2 build notifying under the legacy name).
    pub bridge: Option<BridgeType>,
    /// Passed through to the pipeline unchanged.
    pub deploy_next: bool,
}

impl NotificationTarget {
    pub const fn new(environment: Environment, channel: Channel) -> Self {
        Self {
            environment,
            channel,
            bridge: None,
            deploy_next: false,
        }
    }

    pub const fn with_deploy_next(mut self) -> Self {
        self.deploy_next = true;
        self
    }

    pub const fn filed_under(mut self, bridge: BridgeType) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// The bridge this target notifies for, given the key it was looked up under.
    pub fn effective_bridge(&self, key: BridgeType) -> BridgeType {
        self.bridge.unwrap_or(key)
    }

    pub fn resolve(&self, key: BridgeType) -> ResolvedTarget {
        ResolvedTarget {
            environment: self.environment,
            channel: self.channel,
            bridge: self.effective_bridge(key),
            deploy_next: self.deploy_next,
        }
    }
}

/// A notification target with its effective bridge filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub environment: Environment,
    pub channel: Channel,
    pub bridge: BridgeType,
    pub deploy_next: bool,
}
