use std::path::PathBuf;

use anyhow::Result;

use bridgemap::BridgeType;
use bridgemap::model::OutputFormat;

pub fn run(
    config: Option<&PathBuf>,
    json: bool,
    bridge: BridgeType,
    image: Option<String>,
    commit: String,
) -> Result<()> {
    let store = super::open_settings(config)?;

    let image = image.unwrap_or_else(|| bridge.to_string());
    if image.is_empty() {
        anyhow::bail!("image name must not be empty");
    }
    if commit.is_empty() {
        anyhow::bail!("commit must not be empty");
    }

    let formatted = bridge.try_format_image(&image, &commit)?;

    match super::output_format(&store, json) {
        OutputFormat::Json => super::print_json(&serde_json::json!({
            "bridge": bridge,
            "image": formatted,
        }))?,
        OutputFormat::Text => println!("{formatted}"),
    }
    Ok(())
}
