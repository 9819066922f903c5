// Single source of truth for all default values.

// --- Files ---
pub const DEFAULT_CONFIG_FILENAME: &str = "fraudscan.toml";

// --- Detection ---
pub const DEFAULT_ASCII_CASE_FOLD: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// --- Environment ---
pub const ENV_LOG_LEVEL: &str = "FRAUDSCAN_LOG_LEVEL";
pub const ENV_ASCII_CASE_FOLD: &str = "FRAUDSCAN_ASCII_CASE_FOLD";
