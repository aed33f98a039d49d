//! 备份文件名候选生成器
//! 枚举域名的全部连续子串作为备份文件名猜测，按首次出现顺序去重
//! 候选数量随输入长度平方增长，因此生成前强制检查长度上限

use std::collections::HashSet;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::{RspResult, RsprayError};

/// 默认域名长度上限（按字符计）
pub const DEFAULT_MAX_DOMAIN_CHARS: usize = 64;

/// 备份文件名候选生成器
pub struct BackupGenerator;

impl BackupGenerator {
    /// 使用默认长度上限生成候选
    pub fn generate(domain: &str) -> RspResult<Vec<String>> {
        Self::generate_bounded(domain, DEFAULT_MAX_DOMAIN_CHARS)
    }

    /// 使用配置中的长度上限生成候选
    pub fn generate_with_config(domain: &str, config: &GlobalConfig) -> RspResult<Vec<String>> {
        Self::generate_bounded(domain, config.max_backup_domain_chars)
    }

    /// 生成候选；输入字符数超过 `max_chars` 时返回 InvalidInput
    ///
    /// 顺序：起点从左到右，每个起点下终点从短到长
    pub fn generate_bounded(domain: &str, max_chars: usize) -> RspResult<Vec<String>> {
        let char_count = domain.chars().count();
        if char_count > max_chars {
            return Err(RsprayError::InvalidInput(format!(
                "domain too long for backup candidates: {} chars (max {})",
                char_count, max_chars
            )));
        }

        // 所有字符边界（含末尾），保证切片不落在多字节字符中间
        let boundaries: Vec<usize> = domain
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(domain.len()))
            .collect();

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for (i, &start) in boundaries.iter().enumerate() {
            for &end in &boundaries[i + 1..] {
                let candidate = &domain[start..end];
                if seen.insert(candidate) {
                    candidates.push(candidate.to_string());
                }
            }
        }

        debug!("备份候选生成完成：输入{}字符，候选{}个", char_count, candidates.len());
        Ok(candidates)
    }
}
