//! rspray - Web侦察内容信号提取与指纹索引库

// 导出全局错误类型
pub use self::error::{RsprayError, RspResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出过滤模块核心接口
pub use self::filter::{ReferenceFilter, BAD_EXT, BAD_SCOOP};

// 导出提取模块核心接口
pub use self::extractor::{PatternDescriptor, PatternSet, ReferenceExtractor};

// 导出工具模块核心接口
pub use self::utils::{BackupGenerator, UrlJoiner};

// 导出规则模块核心接口
pub use self::rule::{
    DetectRule, Favicon, Finger, FingerMatcher, Framework, FrameworkSource, TemplateLoader,
    Templates,
};

// 导出索引模块核心接口
pub use self::index::{
    FingerprintIndex,
    FingerprintIndexBuilder,
    Registry,
    init_registry,
    init_registry_with_templates,
    global_registry,
    finger_detect,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod filter;
pub mod extractor;
pub mod utils;
pub mod rule;
pub mod index;
