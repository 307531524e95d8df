use std::path::PathBuf;

use anyhow::Result;

use bridgemap::BridgeType;
use bridgemap::model::{OutputFormat, ResolvedTarget};

pub fn run(config: Option<&PathBuf>, json: bool, bridge: BridgeType) -> Result<()> {
    let store = super::open_settings(config)?;

    let resolved: Vec<ResolvedTarget> = bridge
        .try_notification_targets()?
        .iter()
        .map(|target| target.resolve(bridge))
        .collect();

    match super::output_format(&store, json) {
        OutputFormat::Json => super::print_json(&resolved)?,
        OutputFormat::Text => {
            for target in &resolved {
                let next = if target.deploy_next { " deploy-next" } else { "" };
                println!(
                    "{:<8} {:<9} {}{}",
                    target.environment.to_string(),
                    target.channel.to_string(),
                    target.bridge,
                    next
                );
            }
        }
    }
    Ok(())
}
