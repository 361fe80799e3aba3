//! Configuration file management and access token lookup.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_ENV,
    MissingTokenError, ResolveOptions, ResolvedConfig, SunbirdConfig, resolve_config,
    validate_endpoint,
};
