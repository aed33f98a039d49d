//! 过滤模块：判定提取到的引用是否为噪声
pub mod reference_filter;

// 导出核心接口
pub use self::reference_filter::{ReferenceFilter, BAD_EXT, BAD_SCOOP};
