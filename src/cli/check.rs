use std::path::PathBuf;

use anyhow::Result;

use bridgemap::BridgeType;
use bridgemap::catalog;
use bridgemap::model::OutputFormat;

pub fn run(config: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = super::open_settings(config)?;
    let format = super::output_format(&store, json);
    let problems = catalog::check();

    match format {
        OutputFormat::Json => super::print_json(&problems)?,
        OutputFormat::Text => {
            for problem in &problems {
                println!("  {problem}");
            }
        }
    }

    if !problems.is_empty() {
        anyhow::bail!("{} problem(s) found in the release catalog", problems.len());
    }
    if format == OutputFormat::Text {
        println!("Catalog OK: {} bridges checked", BridgeType::ALL.len());
    }
    Ok(())
}
