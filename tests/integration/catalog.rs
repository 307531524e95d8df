use std::collections::HashSet;

use bridgemap::catalog::{self, EntryStatus};
use bridgemap::{BridgeType, BridgemapError, Channel, Environment};

const PRIMARY: &[BridgeType] = &[
    BridgeType::Telegram,
    BridgeType::TelegramV2,
    BridgeType::WhatsApp,
    BridgeType::Facebook,
    BridgeType::GoogleChat,
    BridgeType::GroupMe,
    BridgeType::Twitter,
    BridgeType::SignalV2,
    BridgeType::Instagram,
    BridgeType::IMessageGo,
    BridgeType::Discord,
    BridgeType::SlackV2,
    BridgeType::GoogleMessages,
    BridgeType::LinkedIn,
    BridgeType::Hungryserv,
    BridgeType::Dummy,
    BridgeType::IMessageCloud,
    BridgeType::Meta,
];

#[test]
fn primary_bridges_have_targets() {
    for bridge in PRIMARY {
        let targets = bridge.notification_targets();
        assert!(!targets.is_empty(), "{bridge} has no targets");
        for target in targets {
            assert!(Environment::ALL.contains(&target.environment));
            assert!(Channel::ALL.contains(&target.channel));
        }
    }
}

#[test]
fn notification_order_is_stable() {
    for bridge in PRIMARY {
        assert_eq!(bridge.notification_targets(), bridge.notification_targets());
    }
}

#[test]
fn telegram_scenario() {
    let bridge = BridgeType::Telegram;
    assert_eq!(bridge.target_repo("ghcr.io/beeper"), "ghcr.io/beeper/bridge/telegram");
    assert_eq!(bridge.format_image("telegram", "abc123"), "telegram:abc123-amd64");

    let targets = bridge.notification_targets();
    let envs: Vec<_> = targets.iter().map(|t| t.environment).collect();
    assert_eq!(
        envs,
        [Environment::Development, Environment::Staging, Environment::Production]
    );
    let deploy_next: Vec<_> = targets.iter().map(|t| t.deploy_next).collect();
    assert_eq!(deploy_next, [false, false, true]);
    assert_eq!(targets[2].channel, Channel::Internal);
    assert!(targets.iter().all(|t| t.effective_bridge(bridge) == bridge));
}

#[test]
fn v2_notifications_are_filed_under_legacy_bridge() {
    for target in BridgeType::SignalV2.notification_targets() {
        assert_eq!(target.effective_bridge(BridgeType::SignalV2), BridgeType::Signal);
    }
    for target in BridgeType::SlackV2.notification_targets() {
        assert_eq!(target.effective_bridge(BridgeType::SlackV2), BridgeType::Slack);
    }
}

#[test]
fn meta_notifies_both_modes_in_order() {
    let bridges: Vec<_> = BridgeType::Meta
        .notification_targets()
        .iter()
        .map(|t| t.resolve(BridgeType::Meta).bridge)
        .collect();
    assert_eq!(
        bridges,
        [
            BridgeType::FacebookGo,
            BridgeType::FacebookGo,
            BridgeType::FacebookGo,
            BridgeType::InstagramGo,
            BridgeType::InstagramGo,
            BridgeType::InstagramGo,
        ]
    );
}

#[test]
fn dummy_interleaves_websocket_variant() {
    let targets = BridgeType::Dummy.notification_targets();
    assert_eq!(targets.len(), 4);
    assert_eq!(targets[1].bridge, Some(BridgeType::DummyWebsocket));
    assert_eq!(targets[3].bridge, Some(BridgeType::DummyWebsocket));
    assert!(targets.iter().all(|t| t.environment != Environment::Production));
}

#[test]
fn imessage_cloud_deploys_next_everywhere() {
    assert!(
        BridgeType::IMessageCloud
            .notification_targets()
            .iter()
            .all(|t| t.deploy_next)
    );
}

#[test]
fn unconfigured_lookups_fail() {
    for bridge in [
        BridgeType::Signal,
        BridgeType::Slack,
        BridgeType::DummyWebsocket,
        BridgeType::FacebookGo,
        BridgeType::InstagramGo,
    ] {
        match bridge.try_notification_targets() {
            Err(BridgemapError::MissingNotificationConfig { bridge: reported }) => {
                assert_eq!(reported, bridge)
            }
            other => panic!("expected missing config for {bridge}, got {other:?}"),
        }
    }
}

#[test]
#[should_panic(expected = "no notification targets defined for 'signal'")]
fn unconfigured_lookup_halts() {
    BridgeType::Signal.notification_targets();
}

#[test]
fn pass_through_entries_are_referenced() {
    for bridge in BridgeType::ALL {
        match catalog::entry_status(bridge) {
            EntryStatus::Targets(n) => assert!(n > 0),
            EntryStatus::PassThrough(via) | EntryStatus::OverrideOnly(via) => {
                assert!(!via.is_empty(), "{bridge} is not referenced");
                for key in via {
                    assert!(
                        key.notification_targets()
                            .iter()
                            .any(|t| t.bridge == Some(bridge))
                    );
                }
            }
            EntryStatus::Unconfigured => panic!("{bridge} is unconfigured"),
        }
    }
    assert_eq!(
        catalog::entry_status(BridgeType::Signal),
        EntryStatus::PassThrough(vec![BridgeType::SignalV2])
    );
    assert_eq!(
        catalog::entry_status(BridgeType::FacebookGo),
        EntryStatus::OverrideOnly(vec![BridgeType::Meta])
    );
}

#[test]
fn entry_status_names_referencing_bridges() {
    assert_eq!(catalog::entry_status(BridgeType::Telegram).to_string(), "3 targets");
    assert_eq!(
        catalog::entry_status(BridgeType::Slack).to_string(),
        "pass-through (via slackgov2)"
    );
    assert_eq!(
        EntryStatus::OverrideOnly(vec![BridgeType::Meta, BridgeType::Dummy]).to_string(),
        "override only (via meta, dummybridge)"
    );
}

#[test]
fn default_image_template() {
    for bridge in [BridgeType::Telegram, BridgeType::WhatsApp, BridgeType::Discord] {
        assert_eq!(bridge.format_image("img", "abc123"), "img:abc123-amd64");
    }
}

#[test]
fn override_templates_keep_literal_text() {
    assert_eq!(
        BridgeType::TelegramV2.format_image("telegram", "abc123"),
        "telegram:v2-abc123-amd64"
    );
    assert_eq!(BridgeType::Hungryserv.format_image("hungryserv", "abc123"), "hungryserv:abc123");
    assert_eq!(BridgeType::IMessageCloud.format_image("ignored", "abc123"), "abc123");
}

#[test]
fn format_image_is_injective_in_commit() {
    let commits = ["a", "b", "abc123", "abc1234", "v2-abc", ""];
    for bridge in BridgeType::ALL {
        let outputs: HashSet<_> = commits
            .iter()
            .map(|commit| bridge.format_image("img", commit))
            .collect();
        assert_eq!(outputs.len(), commits.len(), "{bridge} collides");
    }
}

#[test]
fn every_template_parses_and_uses_commit() {
    for bridge in BridgeType::ALL {
        assert!(bridge.try_format_image("img", "abc").is_ok());
        let template = catalog::ImageTemplate::parse(catalog::image_template(bridge)).unwrap();
        assert!(template.has_commit(), "{bridge} template has no commit");
    }
}

#[test]
fn default_target_repo() {
    assert_eq!(
        BridgeType::WhatsApp.target_repo("registry.example.com"),
        "registry.example.com/bridge/whatsapp"
    );
    assert_eq!(
        BridgeType::Discord.target_repo("registry.example.com"),
        "registry.example.com/bridge/discordgo"
    );
}

#[test]
fn target_repo_overrides_skip_default_pattern() {
    let registry = "registry.example.com";
    assert_eq!(BridgeType::Hungryserv.target_repo(registry), "registry.example.com/hungryserv");
    assert_eq!(
        BridgeType::SignalV2.target_repo(registry),
        "registry.example.com/bridge/signal"
    );
    assert_eq!(
        BridgeType::SlackV2.target_repo(registry),
        "registry.example.com/bridge/slackgo"
    );
    assert_eq!(
        BridgeType::TelegramV2.target_repo(registry),
        "registry.example.com/bridge/telegramgo"
    );
}

#[test]
fn bridge_identifiers_round_trip() {
    for bridge in BridgeType::ALL {
        assert_eq!(bridge.as_str().parse::<BridgeType>().unwrap(), bridge);
        assert_eq!(
            serde_json::to_string(&bridge).unwrap(),
            format!("\"{}\"", bridge.as_str())
        );
    }
    assert!(matches!(
        "telegramgo".parse::<BridgeType>(),
        Err(BridgemapError::UnknownBridge(name)) if name == "telegramgo"
    ));
}

#[test]
fn shipped_catalog_has_no_problems() {
    assert_eq!(catalog::check(), Vec::new());
}
