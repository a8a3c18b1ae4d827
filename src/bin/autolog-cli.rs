use std::path::PathBuf;

use clap::{Parser, Subcommand};

use auto_log::config::{
    apply_updates, describe_overrides, describe_resolution, load_config, ConfigWatcher,
};
use auto_log::intercept::{MethodOverrides, MethodSignature};
use auto_log::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "autolog-cli")]
#[command(about = "Inspect and watch auto-log method configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file and list the observed methods
    Check { config: PathBuf },
    /// Show the options a config gives one method identity
    Resolve { config: PathBuf, identity: String },
    /// Follow a config file and report every successful reload
    Watch { config: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => {
            let config = load_config(&config)?;
            println!("{}", describe_overrides(&MethodOverrides::from_config(&config)));
        }
        Commands::Resolve { config, identity } => {
            let config = load_config(&config)?;
            let signature: MethodSignature = identity.parse()?;
            let overrides = MethodOverrides::from_config(&config);
            println!("{}", describe_resolution(&overrides, &signature));
        }
        Commands::Watch { config: path } => {
            let config = load_config(&path)?;
            init_logging(&config.observability)?;

            let overrides = MethodOverrides::from_config(&config).into_shared();
            let (watcher, updates) = ConfigWatcher::new(&path);
            let _watcher = watcher.run()?;
            let reloader = apply_updates(updates, overrides);

            tracing::info!(path = %path.display(), "Watching for changes, Ctrl-C to stop");
            tokio::signal::ctrl_c().await?;
            reloader.abort();
        }
    }

    Ok(())
}
