use std::path::PathBuf;

use anyhow::Result;

use bridgemap::BridgeType;
use bridgemap::model::OutputFormat;

pub fn run(
    config: Option<&PathBuf>,
    json: bool,
    bridge: BridgeType,
    registry: Option<String>,
) -> Result<()> {
    let store = super::open_settings(config)?;

    let registry = match registry.or_else(|| store.settings().default_registry.clone()) {
        Some(r) if !r.is_empty() => r,
        _ => anyhow::bail!("no registry given; pass --registry or set default_registry"),
    };

    let repo = bridge.target_repo(&registry);

    match super::output_format(&store, json) {
        OutputFormat::Json => super::print_json(&serde_json::json!({
            "bridge": bridge,
            "repository": repo,
        }))?,
        OutputFormat::Text => println!("{repo}"),
    }
    Ok(())
}
