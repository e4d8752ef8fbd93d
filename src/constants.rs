/// Constants module to avoid magic numbers in the codebase

// UI Configuration
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const UI_PAGE_SCROLL_LINES: u16 = 10;

// Config locations
pub const LOCAL_CONFIG_PATH: &str = ".statbot/config.toml";
pub const ENV_PREFIX: &str = "STATBOT_";

// Written under the config dir when --verbose is combined with the TUI
pub const LOG_FILE_NAME: &str = "statbot.log";
