// src/config.rs - Gateway configuration
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub cors_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 4,
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Page size limits applied to every listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub paging: PagingConfig,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            paging: PagingConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Load configuration: defaults, then the TOML file, then `.env`, then the environment.
///
/// The file is taken from `path` or, failing that, from `CONFIG_FILE`. A
/// missing `.env` is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let file = path
        .map(Path::to_path_buf)
        .or_else(|| env::var("CONFIG_FILE").ok().map(PathBuf::from));
    if let Some(file) = file {
        config = load_from_file(&file)?;
    }

    load_from_env(&mut config);
    normalize_paging(&mut config.paging);

    Ok(config)
}

/// Keep page sizes usable: `max_size` at least 1, `default_size` in `1..=max_size`
fn normalize_paging(paging: &mut PagingConfig) {
    if paging.max_size == 0 {
        warn!("Maximum page size 0 is not usable, raising it to 1");
        paging.max_size = 1;
    }

    if paging.default_size == 0 || paging.default_size > paging.max_size {
        warn!(
            "Default page size {} is outside 1..={}, clamping",
            paging.default_size, paging.max_size
        );
        paging.default_size = paging.default_size.clamp(1, paging.max_size);
    }
}

/// Load configuration from a TOML file
fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))
}

/// Override configuration with environment variables
fn load_from_env(config: &mut Config) {
    if let Ok(host) = env::var("API_HOST") {
        config.api.host = host;
    }

    if let Ok(port) = env::var("API_PORT") {
        match port.parse() {
            Ok(port) => config.api.port = port,
            Err(_) => warn!("Ignoring invalid API_PORT: {}", port),
        }
    }

    if let Ok(workers) = env::var("API_WORKERS") {
        match workers.parse() {
            Ok(workers) => config.api.workers = workers,
            Err(_) => warn!("Ignoring invalid API_WORKERS: {}", workers),
        }
    }

    if let Ok(origin) = env::var("CORS_ORIGIN") {
        config.api.cors_origin = origin;
    }

    if let Ok(size) = env::var("PAGE_DEFAULT_SIZE") {
        match size.parse() {
            Ok(size) => config.paging.default_size = size,
            Err(_) => warn!("Ignoring invalid PAGE_DEFAULT_SIZE: {}", size),
        }
    }

    if let Ok(size) = env::var("PAGE_MAX_SIZE") {
        match size.parse() {
            Ok(size) => config.paging.max_size = size,
            Err(_) => warn!("Ignoring invalid PAGE_MAX_SIZE: {}", size),
        }
    }

    if let Ok(level) = env::var("LOG_LEVEL") {
        config.log_level = level;
    }
}
