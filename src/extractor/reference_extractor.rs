//! 引用提取器
//! 从响应内容中提取JS文件与URL引用，过滤噪声后返回；可选按基址规范化

use std::collections::HashSet;
use tracing::debug;
use url::Url;

use super::pattern::{PatternSet, JS_PATTERNS, URL_PATTERNS};
use crate::filter::ReferenceFilter;
use crate::utils::UrlJoiner;

/// 引用提取器
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    /// 提取JS引用（已过滤）
    pub fn extract_js(content: &str) -> Vec<String> {
        Self::extract_with(&JS_PATTERNS, content, ReferenceFilter::is_js_noise)
    }

    /// 提取URL引用（已过滤）
    pub fn extract_urls(content: &str) -> Vec<String> {
        Self::extract_with(&URL_PATTERNS, content, ReferenceFilter::is_url_noise)
    }

    /// 提取JS引用并按基址规范化（绝对URL保持原样）
    pub fn extract_js_with_base(content: &str, base: &str) -> Vec<String> {
        Self::normalize_all(Self::extract_js(content), base)
    }

    /// 提取URL引用并按基址规范化（绝对URL保持原样）
    pub fn extract_urls_with_base(content: &str, base: &str) -> Vec<String> {
        Self::normalize_all(Self::extract_urls(content), base)
    }

    /// 使用指定模式集与过滤器提取
    pub fn extract_with(
        patterns: &PatternSet,
        content: &str,
        is_noise: impl Fn(&str) -> bool,
    ) -> Vec<String> {
        let raw = patterns.find_all(content);
        let raw_count = raw.len();

        let kept: Vec<String> = raw
            .into_iter()
            .filter(|reference| !is_noise(reference.as_str()))
            .collect();

        debug!(
            "引用提取完成：原始匹配{}条，过滤后保留{}条",
            raw_count,
            kept.len()
        );
        kept
    }

    /// 按首次出现顺序去重（提取器本身不去重，供调用方按需使用）
    pub fn dedup(references: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        references
            .into_iter()
            .filter(|reference| seen.insert(reference.clone()))
            .collect()
    }

    fn normalize_all(references: Vec<String>, base: &str) -> Vec<String> {
        references
            .into_iter()
            .map(|reference| {
                if Self::is_absolute(&reference) {
                    reference
                } else {
                    UrlJoiner::join(base, &reference)
                }
            })
            .collect()
    }

    /// 是否为带协议的绝对URL
    fn is_absolute(reference: &str) -> bool {
        Url::parse(reference).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_script_src() {
        let content = r#"<script src="/static/app.abc123.js"></script>"#;
        let refs = ReferenceExtractor::extract_js(content);

        // quoted_js 与 assigned_js 各命中一次，提取器不做跨模式去重
        assert_eq!(refs, vec!["/static/app.abc123.js"; 2]);
        assert_eq!(
            JS_PATTERNS.find_by_name("quoted_js", content).unwrap(),
            vec!["/static/app.abc123.js"]
        );
        assert_eq!(
            JS_PATTERNS.find_by_name("assigned_js", content).unwrap(),
            vec!["/static/app.abc123.js"]
        );
        assert!(JS_PATTERNS.find_by_name("absolute_js", content).unwrap().is_empty());
        assert_eq!(ReferenceExtractor::dedup(refs), vec!["/static/app.abc123.js"]);
    }

    #[test]
    fn test_extract_js_drops_scoop() {
        let content = r#"<script src="https://example.com/lib/demo.js"></script>"#;
        assert!(ReferenceExtractor::extract_js(content).is_empty());
    }

    #[test]
    fn test_extract_url_drops_denylisted_domain() {
        let content = r#"<a href="http://example.com/login">"#;

        let raw = URL_PATTERNS.find_all(content);
        assert!(raw.contains(&"http://example.com/login".to_string()));

        assert!(ReferenceExtractor::extract_urls(content).is_empty());
    }

    #[test]
    fn test_extract_urls_filters_static_assets() {
        let content = r#"
            <link href="/css/site.css" rel="stylesheet">
            <img src="/assets/logo.svg">
            <script>fetch("/api/users").then(r => r.json());</script>
            <form action="/login.php" method="post"></form>
        "#;
        let refs = ReferenceExtractor::dedup(ReferenceExtractor::extract_urls(content));

        assert!(refs.contains(&"/api/users".to_string()));
        assert!(refs.contains(&"/login.php".to_string()));
        assert!(!refs.iter().any(|r| r.ends_with(".css") || r.ends_with(".svg")));
    }

    #[test]
    fn test_extract_urls_drops_malformed_escape() {
        let content = r#"fetch("/report/100%/view"); fetch("/report/latest")"#;
        assert_eq!(ReferenceExtractor::extract_urls(content), vec!["/report/latest"]);
    }

    #[test]
    fn test_extract_pattern_order() {
        // 先全部 quoted_absolute_url，再 quoted_relative_path
        let content = r#"a("/first/path"); b("https://t.test/second");"#;
        let refs = ReferenceExtractor::extract_urls(content);
        assert_eq!(refs, vec!["https://t.test/second", "/first/path"]);
    }

    #[test]
    fn test_extract_with_base() {
        let content = r#"a("/api/users"); b("https://t.test/abs");"#;
        let refs = ReferenceExtractor::extract_urls_with_base(content, "http://target.test/");
        assert_eq!(refs, vec!["https://t.test/abs", "http://target.test/api/users"]);

        let js = ReferenceExtractor::extract_js_with_base(
            r#"<script src="dist/main.bundle.js"></script>"#,
            "http://target.test/app",
        );
        assert!(js.iter().all(|r| r == "http://target.test/app/dist/main.bundle.js"));
    }

    #[test]
    fn test_extract_empty_content() {
        assert!(ReferenceExtractor::extract_js("").is_empty());
        assert!(ReferenceExtractor::extract_urls("").is_empty());
    }
}
