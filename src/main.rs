use anyhow::Context;
use clap::Parser;
use flowstack::config::Config;
use flowstack::error::AppError;
use flowstack::logging::init_tracing;
use flowstack::ui::runtime;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flowstack", version, about = "Coordinator-driven navigation in the terminal")]
struct Args {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in the dashboard instead of the sign-in flow
    #[arg(long)]
    authenticated: bool,

    /// Override ui.tick_rate_ms
    #[arg(long, value_name = "MS")]
    tick_rate_ms: Option<u64>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if self.authenticated {
            config.session.start_authenticated = true;
        }
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick_rate_ms;
        }
    }

    /// Load the config file, then apply and re-validate the overrides.
    fn load_config(&self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = args
        .load_config()
        .context("Failed to load configuration")?;

    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
        .map_err(|source| AppError::Runtime { source })?;

    runtime::run(config, async_runtime.handle().clone()).context("Terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowstack::config::ConfigError;

    #[test]
    fn defaults_leave_config_untouched() {
        let args = Args::parse_from(["flowstack"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_apply_to_config() {
        let args = Args::parse_from(["flowstack", "--authenticated", "--tick-rate-ms", "40"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(config.session.start_authenticated);
        assert_eq!(config.ui.tick_rate_ms, 40);
    }

    #[test]
    fn zero_tick_rate_override_fails_validation() {
        let args = Args::parse_from(["flowstack", "--tick-rate-ms", "0"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ntick_rate_ms = ").unwrap();
        let args = Args::parse_from(["flowstack", "--config", path.to_str().unwrap()]);

        let err = args.load_config().unwrap_err();

        assert!(matches!(
            err,
            AppError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn override_is_validated_after_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntick_rate_ms = 100\n").unwrap();
        let args = Args::parse_from([
            "flowstack",
            "--config",
            path.to_str().unwrap(),
            "--tick-rate-ms",
            "0",
        ]);

        let err = args.load_config().unwrap_err();

        assert!(matches!(
            err,
            AppError::Config(ConfigError::ValidationError { .. })
        ));
    }
}
