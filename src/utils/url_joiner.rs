//! 路径拼接工具
//! 纯文本拼接，只决定边界处的 "/"，不做 RFC 3986 解析、不折叠 ".."

/// 路径拼接工具
pub struct UrlJoiner;

impl UrlJoiner {
    /// 拼接基址与引用
    ///
    /// | base 以 "/" 结尾 | reference 以 "/" 开头 | 结果 |
    /// |---|---|---|
    /// | 是 | 否 | base + reference |
    /// | 否 | 是 | base + reference |
    /// | 是 | 是 | base + reference[1..] |
    /// | 否 | 否 | base + "/" + reference |
    pub fn join(base: &str, reference: &str) -> String {
        let base_slash = base.ends_with('/');
        let reference_slash = reference.starts_with('/');

        match (base_slash, reference_slash) {
            (true, false) | (false, true) => format!("{}{}", base, reference),
            (true, true) => format!("{}{}", base, &reference[1..]),
            (false, false) => format!("{}/{}", base, reference),
        }
    }
}
