//! 引用提取模式定义
//! 每个模式都有名字，可单独编译、单独测试；同一模式集内的模式互不短路

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::RspResult;

/// 长重复区间 + Unicode 取反字符类会生成较大的自动机，放宽默认编译上限
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// 模式描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDescriptor {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// JS文件引用模式：以 .js 结尾的引号串 / 赋值串，排除越界吞入标记的引号、括号、空白
pub const JS_PATTERN_DESCRIPTORS: &[PatternDescriptor] = &[
    PatternDescriptor {
        name: "absolute_js",
        pattern: r#".(https{0,1}:[^\s,^',^’,^",^”,^>,^<,^;,^(,^),^|,^*,^\[]{2,250}?[^=,^*,^\s,^',^’,^",^”,^>,^<,^:,^;,^*,^|,^(,^),^\[]{3}[.]js)"#,
    },
    PatternDescriptor {
        name: "quoted_js",
        pattern: r#"[",',‘,“]\s{0,6}(/{0,1}[^\s,^',^’,^",^”,^|,^>,^<,^:,^;,^*,^(,^\),^\[]{2,250}?[^=,^*,^\s,^',^’,^|,^",^”,^>,^<,^:,^;,^*,^(,^),^\[]{3}[.]js)"#,
    },
    PatternDescriptor {
        name: "assigned_js",
        pattern: r#"=\s{0,6}[",',’,”]{0,1}\s{0,6}(/{0,1}[^\s,^',^’,^",^”,^|,^>,^<,^;,^*,^(,^),^\[]{2,250}?[^=,^*,^\s,^',^’,^",^”,^>,^|,^<,^:,^;,^*,^(,^),^\[]{3}[.]js)"#,
    },
];

/// 通用URL引用模式：引号内绝对URL、赋值绝对URL、引号内根相对路径、href/action 属性值
pub const URL_PATTERN_DESCRIPTORS: &[PatternDescriptor] = &[
    PatternDescriptor {
        name: "quoted_absolute_url",
        pattern: r#"[",',‘,“]\s{0,6}(https{0,1}:[^\s,^',^’,^",^”,^>,^<,^),^(]{2,250}?)\s{0,6}[",',‘,“]"#,
    },
    PatternDescriptor {
        name: "assigned_absolute_url",
        pattern: r#"=\s{0,6}(https{0,1}:[^\s,^',^’,^",^”,^>,^<,^),^(]{2,250})"#,
    },
    PatternDescriptor {
        name: "quoted_relative_path",
        pattern: r#"[",',‘,“]\s{0,6}([#,.]{0,2}/[^\s,^',^’,^",^”,^>,^<,^:,^),^(]{2,250}?)\s{0,6}[",',‘,“]"#,
    },
    PatternDescriptor {
        name: "href_action_attribute",
        pattern: r#"href\s{0,6}=\s{0,6}[",',‘,“]{0,1}\s{0,6}([^\s,^',^’,^",^“,^>,^<,^,^+),^(]{2,250})|action\s{0,6}=\s{0,6}[",',‘,“]{0,1}\s{0,6}([^\s,^',^’,^",^“,^>,^<,^,^+),^(]{2,250})"#,
    },
];

/// 编译后的单个模式
#[derive(Debug, Clone)]
pub struct CompiledReferencePattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl CompiledReferencePattern {
    /// 对整段输入执行匹配，每个匹配取第一个非空捕获组
    pub fn find_all(&self, content: &str) -> Vec<String> {
        self.regex
            .captures_iter(content)
            .filter_map(|captures| {
                captures
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .find(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .collect()
    }
}

/// 有序模式集
///
/// 提取约定：模式集内每个模式都独立跑完整段输入，结果按
/// "模式1的全部匹配, 模式2的全部匹配, ..." 顺序拼接，不跨模式去重
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<CompiledReferencePattern>,
}

impl PatternSet {
    /// 按给定顺序编译模式集，任一模式编译失败即返回错误
    pub fn compile(descriptors: &[PatternDescriptor]) -> RspResult<Self> {
        let mut patterns = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let regex = RegexBuilder::new(descriptor.pattern)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()?;
            patterns.push(CompiledReferencePattern {
                name: descriptor.name,
                regex,
            });
        }

        debug!(
            "引用模式集编译完成：{:?}",
            patterns.iter().map(|p| p.name).collect::<Vec<_>>()
        );
        Ok(Self { patterns })
    }

    /// 全部模式依次匹配并拼接结果
    pub fn find_all(&self, content: &str) -> Vec<String> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.find_all(content))
            .collect()
    }

    /// 仅运行指定名字的模式，名字不存在返回 None
    pub fn find_by_name(&self, name: &str, content: &str) -> Option<Vec<String>> {
        self.patterns
            .iter()
            .find(|pattern| pattern.name == name)
            .map(|pattern| pattern.find_all(content))
    }

    /// 模式名列表（按顺序）
    pub fn names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name).collect()
    }
}

/// 全局JS引用模式集（内置常量模式，编译失败属于程序错误）
pub static JS_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(JS_PATTERN_DESCRIPTORS).unwrap()
});

/// 全局URL引用模式集
pub static URL_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(URL_PATTERN_DESCRIPTORS).unwrap()
});
