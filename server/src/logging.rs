use std::{fs::OpenOptions, path::Path};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "server=debug,proximity=debug,vehicles=debug,fleet_tracker_data_management=debug,tower_http=debug";

/// Logs to stdout, and additionally to `log_file` without colours when set.
/// `RUST_LOG` replaces the default filter.
pub fn init(log_file: Option<&str>) -> anyhow::Result<()> {
    let file_layer = match log_file {
        Some(log_file) => {
            if let Some(dir) = Path::new(log_file).parent() {
                std::fs::create_dir_all(dir)?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVES.into()))
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}
