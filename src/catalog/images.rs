use crate::model::BridgeType;

pub const DEFAULT_IMAGE_TEMPLATE: &str = "{image}:{commit}-amd64";

pub(crate) fn template_override(bridge: BridgeType) -> Option<&'static str> {
    match bridge {
        BridgeType::Dummy
        | BridgeType::GroupMe
        | BridgeType::Hungryserv
        | BridgeType::LinkedIn
        | BridgeType::IMessageGo => Some("{image}:{commit}"),
        BridgeType::IMessageCloud => Some("{commit}"),
        BridgeType::SignalV2 | BridgeType::SlackV2 | BridgeType::TelegramV2 => {
            Some("{image}:v2-{commit}-amd64")
        }
        _ => None,
    }
}

pub(crate) fn template_for(bridge: BridgeType) -> &'static str {
    template_override(bridge).unwrap_or(DEFAULT_IMAGE_TEMPLATE)
}
