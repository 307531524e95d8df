use crate::model::{BridgeType, Channel, Environment, NotificationTarget};

pub(crate) type EntryLookup = fn(BridgeType) -> Option<&'static [NotificationTarget]>;

const DEV: NotificationTarget = NotificationTarget::new(Environment::Development, Channel::Stable);
const STAGING: NotificationTarget = NotificationTarget::new(Environment::Staging, Channel::Stable);
const PROD: NotificationTarget =
    NotificationTarget::new(Environment::Production, Channel::Internal).with_deploy_next();

const DEFAULT: &[NotificationTarget] = &[DEV, STAGING, PROD];

const SIGNAL_V2: &[NotificationTarget] = &[
    DEV.filed_under(BridgeType::Signal),
    STAGING.filed_under(BridgeType::Signal),
    PROD.filed_under(BridgeType::Signal),
];

const SLACK_V2: &[NotificationTarget] = &[
    DEV.filed_under(BridgeType::Slack),
    STAGING.filed_under(BridgeType::Slack),
    PROD.filed_under(BridgeType::Slack),
];

// One image serves both the Facebook and Instagram modes.
const META: &[NotificationTarget] = &[
    DEV.filed_under(BridgeType::FacebookGo),
    STAGING.filed_under(BridgeType::FacebookGo),
    PROD.filed_under(BridgeType::FacebookGo),
    DEV.filed_under(BridgeType::InstagramGo),
    STAGING.filed_under(BridgeType::InstagramGo),
    PROD.filed_under(BridgeType::InstagramGo),
];

const DUMMY: &[NotificationTarget] = &[
    DEV,
    DEV.filed_under(BridgeType::DummyWebsocket),
    STAGING,
    STAGING.filed_under(BridgeType::DummyWebsocket),
];

const IMESSAGE_CLOUD: &[NotificationTarget] =
    &[DEV.with_deploy_next(), STAGING.with_deploy_next(), PROD];

/// Raw notification table entry.
///
/// `None` means the bridge has no entry at all; `Some(&[])` marks a
/// pass-through entry that is only ever reached as another entry's override.
/// Neither is a valid answer for a direct lookup.
pub(crate) fn entry(bridge: BridgeType) -> Option<&'static [NotificationTarget]> {
    match bridge {
        BridgeType::Telegram
        | BridgeType::TelegramV2
        | BridgeType::WhatsApp
        | BridgeType::Facebook
        | BridgeType::GoogleChat
        | BridgeType::GroupMe
        | BridgeType::Twitter
        | BridgeType::Instagram
        | BridgeType::IMessageGo
        | BridgeType::Discord
        | BridgeType::GoogleMessages
        | BridgeType::LinkedIn
        | BridgeType::Hungryserv => Some(DEFAULT),
        BridgeType::SignalV2 => Some(SIGNAL_V2),
        BridgeType::SlackV2 => Some(SLACK_V2),
        BridgeType::Meta => Some(META),
        BridgeType::Dummy => Some(DUMMY),
        BridgeType::IMessageCloud => Some(IMESSAGE_CLOUD),
        BridgeType::Signal | BridgeType::Slack | BridgeType::DummyWebsocket => Some(&[]),
        BridgeType::FacebookGo | BridgeType::InstagramGo => None,
    }
}

/// Bridges whose entries file at least one notification under `bridge`.
pub(crate) fn referenced_by(bridge: BridgeType) -> Vec<BridgeType> {
    referenced_in(entry, bridge)
}

pub(crate) fn referenced_in(table: EntryLookup, bridge: BridgeType) -> Vec<BridgeType> {
    BridgeType::ALL
        .into_iter()
        .filter(|key| *key != bridge)
        .filter(|key| {
            table(*key)
                .unwrap_or_default()
                .iter()
                .any(|target| target.bridge == Some(bridge))
        })
        .collect()
}
