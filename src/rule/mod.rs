//! 规则模块：指纹数据模型、外部匹配器接口、模板加载
pub mod model;
pub mod matcher;
pub mod loader;

// 导出核心接口
pub use self::model::{DetectRule, Favicon, Finger, Framework, FrameworkSource, Templates};
pub use self::matcher::FingerMatcher;
pub use self::loader::TemplateLoader;
