//! 提取模块：从响应内容中提取嵌入的URL与JS文件引用
pub mod pattern;
pub mod reference_extractor;

// 导出核心接口
pub use self::pattern::{
    CompiledReferencePattern, PatternDescriptor, PatternSet, JS_PATTERNS,
    JS_PATTERN_DESCRIPTORS, URL_PATTERNS, URL_PATTERN_DESCRIPTORS,
};
pub use self::reference_extractor::ReferenceExtractor;
