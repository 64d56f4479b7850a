use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes file logging under the data directory.
///
/// Stdout belongs to the terminal UI, so all diagnostics go to
/// `{data_dir}/daytrip.log`. The `RUST_LOG` environment variable overrides
/// `level` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> std::io::Result<()> {
    fs::create_dir_all(data_dir)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("daytrip.log"))?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daytrip={level}")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The subscriber is process-global, so exactly one test exercises init.
    #[test]
    fn creates_and_writes_log_file_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested");

        init_logging(&data_dir, "info").unwrap();

        let contents = fs::read_to_string(data_dir.join("daytrip.log")).unwrap();
        assert!(contents.contains("logging initialized"));
    }
}
