//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

use crate::utils::backup_generator::DEFAULT_MAX_DOMAIN_CHARS;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 模板目录（指纹库/规则字典/掩码关键字）
    pub template_dir: PathBuf,
    // 指纹库文件名
    pub finger_file: String,
    // 规则字典文件名
    pub rule_file: String,
    // 掩码关键字文件名
    pub mask_file: String,
    // 备份文件候选生成的域名长度上限（按字符计）
    pub max_backup_domain_chars: usize,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            finger_file: "http.json".to_string(),
            rule_file: "rule.json".to_string(),
            mask_file: "mask.json".to_string(),
            max_backup_domain_chars: DEFAULT_MAX_DOMAIN_CHARS,
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 指纹库完整路径
    pub fn finger_path(&self) -> PathBuf {
        self.template_dir.join(&self.finger_file)
    }

    /// 规则字典完整路径
    pub fn rule_path(&self) -> PathBuf {
        self.template_dir.join(&self.rule_file)
    }

    /// 掩码关键字完整路径
    pub fn mask_path(&self) -> PathBuf {
        self.template_dir.join(&self.mask_file)
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.template_dir = dir.into();
        self
    }

    pub fn finger_file(mut self, name: impl Into<String>) -> Self {
        self.config.finger_file = name.into();
        self
    }

    pub fn rule_file(mut self, name: impl Into<String>) -> Self {
        self.config.rule_file = name.into();
        self
    }

    pub fn mask_file(mut self, name: impl Into<String>) -> Self {
        self.config.mask_file = name.into();
        self
    }

    pub fn max_backup_domain_chars(mut self, max: usize) -> Self {
        self.config.max_backup_domain_chars = max;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
