use anyhow::Result;

use crate::{
    app::{load_config, load_config_file, Config},
    cli::{handle_command, Cli},
    tui::{run_ui, App},
    utils::{log_debug, log_info, log_warn},
};

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        let config = resolve_config(&cli)?;
        Ok(Self { cli, config })
    }

    /// Run the orchestrator
    pub async fn run(self) -> Result<()> {
        // Handle subcommands
        if let Some(command) = &self.cli.command {
            if handle_command(command)? {
                return Ok(()); // Command handled, exit
            }
            // Continue to chat for Commands::Chat
        }

        log_info("[chat]", "opening session");
        let app = App::new(&self.config);
        run_ui(app).await
    }
}

/// Explicit --config wins; otherwise layered config, falling back to defaults.
/// The --echo flag overrides whatever the files say.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        load_config_file(config_path)?
    } else {
        match load_config() {
            Ok(cfg) => cfg,
            Err(e) => {
                log_warn("[config]", format!("Failed to load config: {:#}. Using defaults.", e));
                Config::default()
            }
        }
    };

    if cli.echo {
        config.chat.echo_selections = true;
    }
    log_debug(format!("resolved config: {:?}", config));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_explicit_config_and_echo_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statbot.toml");
        std::fs::write(&path, "[ui]\ntheme = \"light\"\nshow_charts = false\nshow_button_ids = true\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let cli = Cli::parse_from(["statbot", "--config", path_str.as_str()]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.ui.theme, "light");
        assert!(!config.ui.show_charts);
        assert!(!config.chat.echo_selections);

        let cli = Cli::parse_from(["statbot", "--config", path_str.as_str(), "--echo"]);
        assert!(resolve_config(&cli).unwrap().chat.echo_selections);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["statbot", "--config", "/definitely/not/here.toml"]);
        assert!(resolve_config(&cli).is_err());
    }
}
