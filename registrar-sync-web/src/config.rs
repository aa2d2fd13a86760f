//! 应用配置
//!
//! Loaded once at startup: an optional TOML file named by
//! `REGISTRAR_SYNC_CONFIG`, overridden key by key by environment variables
//! (after `.env` has been read by the caller).

use std::fmt;
use std::path::Path;

use registrar_sync_core::types::{RunMode, SyncSettings};
use registrar_sync_provider::{RegistrarCredentials, UsageCredentials};
use serde::Deserialize;
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "REGISTRAR_SYNC_CONFIG";
/// 默认监听端口
pub const DEFAULT_PORT: u16 = 3001;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("Failed to read config file {path}: {detail}")]
    File { path: String, detail: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// TOML 配置文件（所有字段可选，键名为环境变量的小写形式）
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub name: Option<String>,
    pub client_ip: Option<String>,
    pub server_api_url: Option<String>,
    pub server_api_token: Option<String>,
    pub team: Option<String>,
    pub no_nc: Option<bool>,
    pub dry_run: Option<bool>,
    pub certs_api_url: Option<String>,
    pub client_url: Option<String>,
    pub node_env: Option<String>,
    pub port: Option<u16>,
    pub api_user: Option<String>,
    pub api_key: Option<String>,
    pub whm_api_key: Option<String>,
    pub log_format: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file_error = |detail: String| ConfigError::File {
            path: path.display().to_string(),
            detail,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| file_error(e.to_string()))
    }
}

/// Immutable application configuration, shared by `Arc`.
#[derive(Clone)]
pub struct AppConfig {
    /// Server name reported to the accounting server (`NAME`).
    pub name: String,
    pub client_ip: String,
    pub server_api_url: String,
    pub server_api_token: String,
    pub team: String,
    /// Skip registrar collection (`NO_NC`).
    pub no_nc: bool,
    pub dry_run: bool,
    /// Key set endpoint for bearer token verification.
    pub certs_api_url: String,
    pub client_url: Option<String>,
    pub node_env: String,
    pub port: u16,
    pub api_user: String,
    pub api_key: String,
    pub whm_api_key: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// 从配置文件和进程环境变量加载
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => FileConfig::from_path(Path::new(path.trim()))?,
            _ => FileConfig::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// 合并文件配置和环境变量（环境变量优先），并校验必填项
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut missing = Vec::new();
        let mut required = |key: &'static str, from_file: Option<String>| {
            let value = lookup(key).or(from_file.filter(|v| !v.trim().is_empty()));
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };

        let name = required("NAME", file.name);
        let client_ip = required("CLIENT_IP", file.client_ip);
        let server_api_url = required("SERVER_API_URL", file.server_api_url);
        let server_api_token = required("SERVER_API_TOKEN", file.server_api_token);
        let team = required("TEAM", file.team);
        let certs_api_url = required("CERTS_API_URL", file.certs_api_url);
        let api_user = required("API_USER", file.api_user);
        let api_key = required("API_KEY", file.api_key);
        let whm_api_key = required("WHM_API_KEY", file.whm_api_key);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let no_nc = lookup("NO_NC").map_or(file.no_nc.unwrap_or(false), |v| parse_flag(&v));
        let dry_run = lookup("DRY_RUN").map_or(file.dry_run.unwrap_or(false), |v| parse_flag(&v));

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let log_format = match lookup("LOG_FORMAT").or(file.log_format) {
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) if raw.eq_ignore_ascii_case("text") || raw.is_empty() => LogFormat::Text,
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    value: raw,
                });
            }
            None => LogFormat::Text,
        };

        let node_env = lookup("NODE_ENV")
            .or(file.node_env)
            .unwrap_or_else(|| "development".to_string());
        let mut client_url = lookup("CLIENT_URL").or(file.client_url);
        // 生产环境下 CLIENT_URL 是唯一允许的 CORS 来源
        if node_env == "production" {
            client_url = client_url.map(|raw| parse_origin(&raw)).transpose()?;
        }

        Ok(Self {
            name,
            client_ip,
            server_api_url: server_api_url.trim_end_matches('/').to_string(),
            server_api_token,
            team,
            no_nc,
            dry_run,
            certs_api_url,
            client_url,
            node_env,
            port,
            api_user,
            api_key,
            whm_api_key,
            log_format,
        })
    }

    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }

    /// `DRY_RUN` wins over `NO_NC`.
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_flags(self.dry_run, self.no_nc)
    }

    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            team_name: self.team.clone(),
            server_name: self.name.clone(),
            client_ip: self.client_ip.clone(),
            mode: self.run_mode(),
        }
    }

    pub fn registrar_credentials(&self) -> RegistrarCredentials {
        RegistrarCredentials {
            api_user: self.api_user.clone(),
            api_key: self.api_key.clone(),
            client_ip: self.client_ip.clone(),
        }
    }

    pub fn usage_credentials(&self) -> UsageCredentials {
        UsageCredentials {
            host: self.client_ip.clone(),
            api_key: self.whm_api_key.clone(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("name", &self.name)
            .field("client_ip", &self.client_ip)
            .field("server_api_url", &self.server_api_url)
            .field("server_api_token", &"***")
            .field("team", &self.team)
            .field("no_nc", &self.no_nc)
            .field("dry_run", &self.dry_run)
            .field("certs_api_url", &self.certs_api_url)
            .field("client_url", &self.client_url)
            .field("node_env", &self.node_env)
            .field("port", &self.port)
            .field("api_user", &self.api_user)
            .field("api_key", &"***")
            .field("whm_api_key", &"***")
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Reduce `CLIENT_URL` to a bare `scheme://host[:port]` origin.
///
/// Wildcards, non-HTTP schemes and values carrying a path, query or fragment
/// are rejected.
fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: "CLIENT_URL",
        value: raw.to_string(),
    };
    let url = reqwest::Url::parse(raw.trim()).map_err(|_| invalid())?;
    let bare = matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some_and(|h| !h.is_empty())
        && url.username().is_empty()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none();
    if !bare {
        return Err(invalid());
    }
    Ok(url.origin().ascii_serialization())
}

/// 仅 `"true"`（忽略大小写）为真
fn parse_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}
