use crate::model::BridgeType;

/// Path suffixes appended verbatim to the registry. Each starts with `/`.
pub(crate) fn repo_override(bridge: BridgeType) -> Option<&'static str> {
    match bridge {
        BridgeType::Hungryserv => Some("/hungryserv"),
        BridgeType::SignalV2 => Some("/bridge/signal"),
        BridgeType::SlackV2 => Some("/bridge/slackgo"),
        BridgeType::TelegramV2 => Some("/bridge/telegramgo"),
        _ => None,
    }
}

pub(crate) fn default_repo(registry: &str, bridge: BridgeType) -> String {
    format!("{registry}/bridge/{bridge}")
}
