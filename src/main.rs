use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose {
                "bridgemap=debug"
            } else {
                "bridgemap=warn"
            })
        }))
        .init();

    let config = cli.config.as_ref();
    match cli.command {
        cli::Command::List => cli::list::run(config, cli.json),
        cli::Command::Targets { bridge } => cli::targets::run(config, cli.json, bridge),
        cli::Command::Image {
            bridge,
            image,
            commit,
        } => cli::image::run(config, cli.json, bridge, image, commit),
        cli::Command::Repo { bridge, registry } => {
            cli::repo::run(config, cli.json, bridge, registry)
        }
        cli::Command::Check => cli::check::run(config, cli.json),
        cli::Command::Config(cmd) => cli::config::run(config, cmd),
    }
}
