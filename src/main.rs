use anyhow::{Context, Result};
use extensions_dashlet::config::Config;
use extensions_dashlet::host::{ExtensionHost, LocalHost, StateStore};
use extensions_dashlet::logger::Logger;
use extensions_dashlet::ui;
use std::path::PathBuf;
use std::sync::Arc;

const USAGE: &str = "Usage: ext-dashlet [--config <path>] [--state <path>] [--generate-config <path>]

Without --config the file named by $EXT_DASHLET_CONFIG, ./extensions-dashlet.toml
or ~/.config/extensions-dashlet/config.toml is used, whichever exists first.";

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    state: Option<PathBuf>,
    generate_config: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .map(PathBuf::from)
                .with_context(|| format!("{} requires a path\n{}", name, USAGE))
        };

        match arg.as_str() {
            "--config" => args.config = Some(value("--config")?),
            "--state" => args.state = Some(value("--state")?),
            "--generate-config" => args.generate_config = Some(value("--generate-config")?),
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => anyhow::bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args()?;

    if let Some(path) = args.generate_config {
        return Config::generate_default_config(path);
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if args.state.is_some() {
        config.host.state_file = args.state;
    }

    let logger = Logger::from_config(config.logging.enabled)?;

    let store = match &config.host.state_file {
        Some(path) => StateStore::load_from_file(path)?,
        None => StateStore::sample()?,
    };
    let host: Arc<dyn ExtensionHost> = Arc::new(LocalHost::from_config(store.clone(), &config.host));

    ui::run_app(store, host, &config, logger).await
}
