use std::path::PathBuf;

use anyhow::Result;

use bridgemap::BridgeType;
use bridgemap::catalog;
use bridgemap::model::OutputFormat;

pub fn run(config: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = super::open_settings(config)?;

    match super::output_format(&store, json) {
        OutputFormat::Json => {
            let rows: Vec<_> = BridgeType::ALL
                .into_iter()
                .map(|bridge| {
                    serde_json::json!({
                        "bridge": bridge,
                        "notifications": catalog::entry_status(bridge).to_string(),
                        "image_template": catalog::image_template(bridge),
                        "repo_override": catalog::repo_override(bridge),
                    })
                })
                .collect();
            super::print_json(&rows)?;
        }
        OutputFormat::Text => {
            for bridge in BridgeType::ALL {
                let repo = catalog::repo_override(bridge)
                    .map(|suffix| format!(" repo: <registry>{suffix}"))
                    .unwrap_or_default();
                println!(
                    "  {:<14} {} [{}]{}",
                    bridge.as_str(),
                    catalog::entry_status(bridge),
                    catalog::image_template(bridge),
                    repo
                );
            }
        }
    }
    Ok(())
}
