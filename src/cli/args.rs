use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "statbot")]
#[command(version)]
#[command(about = "A menu-driven chatbot for private tutoring expenditure statistics", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Button id to press non-interactively (repeatable, applied in order)
    #[arg(short, long = "press", value_name = "BUTTON_ID")]
    pub presses: Vec<String>,

    /// Output format for non-interactive mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "presses")]
    pub output_format: OutputFormat,

    /// Echo each pressed button as a user message
    #[arg(long, env = "STATBOT_ECHO")]
    pub echo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Reject flag combinations clap's derive attributes can't express
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Some(command) if !self.presses.is_empty() => Err(format!(
                "--press cannot be combined with the '{}' subcommand",
                command.name()
            )),
            _ => Ok(()),
        }
    }

    /// True when this invocation will hand the terminal to the TUI
    pub fn is_interactive(&self) -> bool {
        self.presses.is_empty() && matches!(self.command, None | Some(Commands::Chat))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// List every button id the bot understands
    Catalog,
    /// Start a chat session (default)
    Chat,
    /// Show version information
    Version,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Catalog => "catalog",
            Self::Chat => "chat",
            Self::Version => "version",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
    /// Markdown formatted output
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presses() {
        let cli = Cli::parse_from(["statbot", "-p", "region", "--press", "gyeonggi", "--output-format", "json"]);
        assert_eq!(cli.presses, vec!["region", "gyeonggi"]);
        assert_eq!(cli.output_format, OutputFormat::Json);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_output_format_requires_presses() {
        assert!(Cli::try_parse_from(["statbot", "--output-format", "json"]).is_err());
    }

    #[test]
    fn test_subcommand() {
        let cli = Cli::parse_from(["statbot", "catalog"]);
        assert!(matches!(cli.command, Some(Commands::Catalog)));
    }

    #[test]
    fn test_press_with_subcommand_is_rejected() {
        let cli = Cli::parse_from(["statbot", "-p", "overview", "init"]);
        let err = cli.validate().unwrap_err();
        assert!(err.contains("'init'"));

        assert!(Cli::parse_from(["statbot", "init"]).validate().is_ok());
        assert!(Cli::parse_from(["statbot", "-p", "overview"]).validate().is_ok());
    }

    #[test]
    fn test_interactive_modes() {
        assert!(Cli::parse_from(["statbot"]).is_interactive());
        assert!(Cli::parse_from(["statbot", "chat"]).is_interactive());
        assert!(!Cli::parse_from(["statbot", "catalog"]).is_interactive());
        assert!(!Cli::parse_from(["statbot", "-p", "overview"]).is_interactive());
    }
}
