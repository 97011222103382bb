//! Laboratory Directory Core Library
//!
//! Shared pieces for the directory server:
//! - Configuration discovery and loading (XDG-compliant)
//! - Filesystem helpers

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::{create_dir_all, is_directory};

/// Application name used for XDG paths
pub const APP_NAME: &str = "labs-directory";

/// Default HTTP port for the directory server
pub const DEFAULT_PORT: u16 = 3000;

/// Name of the config file searched for in the standard locations
pub const CONFIG_FILE_NAME: &str = "directory.toml";

/// Environment variable holding an explicit config file path
pub const CONFIG_ENV_VAR: &str = "LABS_DIRECTORY_CONFIG";
