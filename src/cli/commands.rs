use anyhow::Result;
use colored::Colorize;

use crate::app::init_config;
use crate::chat::catalog;
use crate::utils::log_info;

use super::Commands;

/// Handle CLI subcommands
pub fn handle_command(command: &Commands) -> Result<bool> {
    match command {
        Commands::Init => {
            println!("Initializing Statbot configuration...");
            let path = init_config()?;
            log_info("[config]", format!("using {}", path.display()));
            println!("Configuration ready at: {}", path.display());
            Ok(true)
        }
        Commands::Catalog => {
            show_catalog();
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Chat => Ok(false), // Continue to chat interface
    }
}

/// List every button grouped by menu
pub fn show_catalog() {
    for (group, buttons) in catalog::GROUPS {
        println!("{}", group.bold());
        for button in buttons.iter() {
            println!("  • {:<22} {}", button.id.green(), button.label);
        }
    }
    println!();
    println!(
        "{}",
        "Any other id pressed on the region menu falls back to default regional figures.".dimmed()
    );
}

/// Show version information
pub fn show_version() {
    println!("Statbot v{}", env!("CARGO_PKG_VERSION"));
    println!("   A menu-driven chatbot for private tutoring expenditure statistics");
}
