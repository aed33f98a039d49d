//! 引用噪声过滤器
//! 纯函数判定：静态资源后缀、模板常见示例域名、无法解析的URL均视为噪声

use once_cell::sync::Lazy;
use url::Url;

/// 静态资源后缀黑名单
/// 注意：其中的 "," 永远无法与路径后缀相等（后缀总以 "." 开头），保留仅为与历史行为一致
pub const BAD_EXT: &[&str] = &[
    ".js", ".css", ".scss", ",", ".jpeg", ".jpg", ".png", ".gif", ".ico", ".svg", ".vue", ".ts",
];

/// 域名/子串黑名单（模板中的样板链接）
pub const BAD_SCOOP: &[&str] = &["www.w3.org", "example.com"];

/// 相对引用解析时使用的占位基址，仅用于判定可解析性与提取路径
static PLACEHOLDER_BASE: Lazy<Url> = Lazy::new(|| {
    Url::parse("http://placeholder.invalid/").unwrap()
});

/// 引用过滤器
pub struct ReferenceFilter;

impl ReferenceFilter {
    /// JS引用是否为噪声：仅检查域名黑名单
    pub fn is_js_noise(reference: &str) -> bool {
        Self::contains_bad_scoop(reference)
    }

    /// URL引用是否为噪声：无法解析 / 后缀命中黑名单 / 包含黑名单域名
    pub fn is_url_noise(reference: &str) -> bool {
        if Self::is_malformed(reference) {
            return true;
        }
        let Some(path) = Self::parse_path(reference) else {
            return true;
        };

        let ext = Self::path_ext(&path);
        if BAD_EXT.iter().any(|bad| *bad == ext) {
            return true;
        }

        Self::contains_bad_scoop(reference)
    }

    /// 解析引用并返回路径部分；绝对URL直接解析，相对引用挂到占位基址上解析
    /// 不透明URL（mailto: 等）没有层级路径，按空路径处理
    fn parse_path(reference: &str) -> Option<String> {
        let parsed = Url::options()
            .base_url(Some(&*PLACEHOLDER_BASE))
            .parse(reference)
            .ok()?;
        if parsed.cannot_be_a_base() {
            return Some(String::new());
        }
        Some(parsed.path().to_string())
    }

    /// WHATWG 解析器会容忍、但严格URL语法不接受的写法：
    /// 控制字符、非法百分号转义（查询串除外）、无协议引用首段含冒号
    fn is_malformed(reference: &str) -> bool {
        if reference.bytes().any(|b| b < 0x20 || b == 0x7f) {
            return true;
        }

        let (before_fragment, fragment) = match reference.split_once('#') {
            Some((head, frag)) => (head, frag),
            None => (reference, ""),
        };
        let rest = before_fragment
            .split_once('?')
            .map_or(before_fragment, |(head, _)| head);

        if Self::has_bad_escape(rest) || Self::has_bad_escape(fragment) {
            return true;
        }

        // 无协议时首段（第一个 "/" 之前）不能含冒号
        if Url::parse(reference).is_err() && !rest.starts_with('/') {
            let first_segment = rest.split('/').next().unwrap_or(rest);
            if first_segment.contains(':') {
                return true;
            }
        }
        false
    }

    /// 是否存在 "%" 后不跟两位十六进制数字的转义
    fn has_bad_escape(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.iter().enumerate().any(|(i, &b)| {
            b == b'%'
                && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                    && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
        })
    }

    /// 取路径最后一段中最后一个 "." 起的后缀，无后缀返回空串
    fn path_ext(path: &str) -> &str {
        let last_segment = path.rsplit('/').next().unwrap_or(path);
        match last_segment.rfind('.') {
            Some(pos) => &last_segment[pos..],
            None => "",
        }
    }

    fn contains_bad_scoop(reference: &str) -> bool {
        BAD_SCOOP.iter().any(|scoop| reference.contains(scoop))
    }
}
