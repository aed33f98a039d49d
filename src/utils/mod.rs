//! 工具模块：路径拼接、备份文件名候选生成
pub mod url_joiner;
pub mod backup_generator;

// 导出核心接口
pub use self::url_joiner::UrlJoiner;
pub use self::backup_generator::{BackupGenerator, DEFAULT_MAX_DOMAIN_CHARS};
