//! 配置基础设施
//!
//! 加载顺序：默认值 → `PRODUCT_API_CONFIG` 指向的 TOML 文件 → 环境变量。

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// 指向 TOML 配置文件的环境变量
pub const CONFIG_PATH_ENV: &str = "PRODUCT_API_CONFIG";

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 服务配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 绑定地址
    pub host: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 共享 API 密钥
    pub api_key: String,
    /// 日志级别 (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_key: "mysecretkey".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 按默认值、配置文件、环境变量的顺序加载并校验
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from_file(path)?,
            _ => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 环境变量覆盖: HOST, PORT, API_KEY, LOG_LEVEL
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port.trim().parse().map_err(|e| ConfigError::InvalidEnv {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;
        }
        if let Ok(api_key) = env::var("API_KEY") {
            self.api_key = api_key;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.log_level = level.to_lowercase();
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::Validation("API 密钥不能为空".to_string()));
        }
        if !VALID_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.log_level, VALID_LEVELS
            )));
        }
        Ok(())
    }

    /// "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("环境变量 '{key}' 解析失败: {details}")]
    InvalidEnv { key: String, details: String },
    #[error("配置验证错误: {0}")]
    Validation(String),
}
