use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BridgemapError;

/// A deployable bridge variant in the release catalog.
///
/// The string form is the identifier the release pipeline uses for image
/// names and repository paths, so it does not always follow the variant
/// name (`Discord` is `discordgo`, `Dummy` is `dummybridge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeType {
    Telegram,
    TelegramV2,
    WhatsApp,
    Facebook,
    FacebookGo,
    GoogleChat,
    GroupMe,
    Twitter,
    Signal,
    SignalV2,
    Instagram,
    InstagramGo,
    Meta,
    #[serde(rename = "discordgo")]
    Discord,
    #[serde(rename = "slackgo")]
    Slack,
    #[serde(rename = "slackgov2")]
    SlackV2,
    #[serde(rename = "gmessages")]
    GoogleMessages,
    LinkedIn,
    IMessageCloud,
    IMessageGo,
    Hungryserv,
    #[serde(rename = "dummybridge")]
    Dummy,
    #[serde(rename = "dummybridgews")]
    DummyWebsocket,
}

impl BridgeType {
    /// Every bridge in the catalog, in declaration order.
    pub const ALL: [BridgeType; 23] = [
        Self::Telegram,
        Self::TelegramV2,
        Self::WhatsApp,
        Self::Facebook,
        Self::FacebookGo,
        Self::GoogleChat,
        Self::GroupMe,
        Self::Twitter,
        Self::Signal,
        Self::SignalV2,
        Self::Instagram,
        Self::InstagramGo,
        Self::Meta,
        Self::Discord,
        Self::Slack,
        Self::SlackV2,
        Self::GoogleMessages,
        Self::LinkedIn,
        Self::IMessageCloud,
        Self::IMessageGo,
        Self::Hungryserv,
        Self::Dummy,
        Self::DummyWebsocket,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::TelegramV2 => "telegramv2",
            Self::WhatsApp => "whatsapp",
            Self::Facebook => "facebook",
            Self::FacebookGo => "facebookgo",
            Self::GoogleChat => "googlechat",
            Self::GroupMe => "groupme",
            Self::Twitter => "twitter",
            Self::Signal => "signal",
            Self::SignalV2 => "signalv2",
            Self::Instagram => "instagram",
            Self::InstagramGo => "instagramgo",
            Self::Meta => "meta",
            Self::Discord => "discordgo",
            Self::Slack => "slackgo",
            Self::SlackV2 => "slackgov2",
            Self::GoogleMessages => "gmessages",
            Self::LinkedIn => "linkedin",
            Self::IMessageCloud => "imessagecloud",
            Self::IMessageGo => "imessagego",
            Self::Hungryserv => "hungryserv",
            Self::Dummy => "dummybridge",
            Self::DummyWebsocket => "dummybridgews",
        }
    }
}

impl std::fmt::Display for BridgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BridgeType {
    type Err = BridgemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bridge| bridge.as_str() == s)
            .ok_or_else(|| BridgemapError::UnknownBridge(s.to_string()))
    }
}
