use std::path::PathBuf;

use anyhow::{Context, Result};

use bridgemap::model::OutputFormat;

use crate::cli::ConfigSubcommand;

pub fn run(config: Option<&PathBuf>, cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => run_show(config),
        ConfigSubcommand::Set { key, value } => run_set(config, key, value),
        ConfigSubcommand::Get { key } => run_get(config, key),
    }
}

fn run_show(config: Option<&PathBuf>) -> Result<()> {
    let store = super::open_settings(config)?;

    let settings = store.settings();
    println!("Settings file:    {}", store.path().display());
    println!("Output:           {}", settings.output);
    println!(
        "Default registry: {}",
        settings.default_registry.as_deref().unwrap_or("(not set)")
    );
    Ok(())
}

fn run_set(config: Option<&PathBuf>, key: String, value: String) -> Result<()> {
    let mut store = super::open_settings(config)?;

    let settings = store.settings_mut();
    let stored = match key.as_str() {
        "output" => {
            settings.output = match value.as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => anyhow::bail!("invalid output value: {value} (expected text or json)"),
            };
            settings.output.to_string()
        }
        "default_registry" => {
            settings.default_registry = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.trim_end_matches('/').to_string())
            };
            settings
                .default_registry
                .clone()
                .unwrap_or_else(|| "(not set)".to_string())
        }
        _ => anyhow::bail!("unknown config key: {key}\nValid keys: default_registry, output"),
    };

    store.save().context("failed to save settings")?;
    println!("Set {key} = {stored}");
    Ok(())
}

fn run_get(config: Option<&PathBuf>, key: String) -> Result<()> {
    let store = super::open_settings(config)?;

    let settings = store.settings();
    match key.as_str() {
        "output" => println!("{}", settings.output),
        "default_registry" => println!(
            "{}",
            settings.default_registry.as_deref().unwrap_or("(not set)")
        ),
        _ => anyhow::bail!("unknown config key: {key}"),
    }
    Ok(())
}
