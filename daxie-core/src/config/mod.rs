//! Daxie 配置模块
//!
//! 统一的配置管理，从 ~/.config/daxie/config.toml 加载

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DaxieError, DaxieResult};

/// Daxie 完整配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaxieConfig {
    /// 转换器配置
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// 转换器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// 校验前先过滤输入（去掉非数字字符、截断多余小数位）
    pub sanitize_input: bool,
    /// 去掉首尾空白
    pub trim_input: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            sanitize_input: false,
            trim_input: true,
        }
    }
}

impl DaxieConfig {
    /// 加载配置文件
    ///
    /// 配置文件不存在时返回默认配置
    pub fn load() -> DaxieResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载配置
    pub fn load_from(path: &Path) -> DaxieResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| DaxieError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?}", path);
        tracing::debug!(
            "转换器配置: sanitize_input={}, trim_input={}",
            config.converter.sanitize_input,
            config.converter.trim_input
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> DaxieResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存配置到指定路径
    pub fn save_to(&self, path: &Path) -> DaxieResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| DaxieError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> DaxieResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(DaxieError::ConfigDir)?;

        Ok(config_dir.join("daxie").join("config.toml"))
    }
}
