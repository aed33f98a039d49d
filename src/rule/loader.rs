//! 模板加载管理器
//! 负责读取指纹库、规则字典、掩码关键字并交给匹配器预编译
//! 任一环节失败都向上返回错误，不产出部分结果

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use serde_json::Value;
use tracing::debug;

use super::matcher::FingerMatcher;
use super::model::{Finger, Templates};
use crate::config::GlobalConfig;
use crate::error::{RspResult, RsprayError};

/// 模板加载管理器
pub struct TemplateLoader;

impl TemplateLoader {
    /// 从配置的模板目录加载全部模板
    pub fn load(config: &GlobalConfig, matcher: &dyn FingerMatcher) -> RspResult<Templates> {
        let fingers = Self::read_file(&config.finger_path())?;
        let rules = Self::read_file(&config.rule_path())?;
        let mask = Self::read_file(&config.mask_path())?;

        debug!("模板文件读取完成，目录：{}", config.template_dir.display());
        Self::from_slices(&fingers, &rules, &mask, matcher)
    }

    /// 从内存字节加载全部模板
    pub fn from_slices(
        fingers: &[u8],
        rules: &[u8],
        mask: &[u8],
        matcher: &dyn FingerMatcher,
    ) -> RspResult<Templates> {
        // 1. 指纹库 + 预编译
        let fingers = Self::parse_fingers(fingers, matcher)?;

        // 2. 规则字典
        let rules = Self::parse_rules(rules)?;

        // 3. 掩码关键字
        let mask_keywords = Self::parse_mask_keywords(mask)?;

        debug!(
            "模板加载完成：指纹{}条、规则{}条、掩码关键字{}组",
            fingers.len(),
            rules.len(),
            mask_keywords.len()
        );

        Ok(Templates {
            fingers,
            rules,
            mask_keywords,
        })
    }

    /// 解析指纹库（JSON 数组），逐条交给匹配器预编译
    pub fn parse_fingers(data: &[u8], matcher: &dyn FingerMatcher) -> RspResult<Vec<Finger>> {
        let fingers: Vec<Finger> = serde_json::from_slice(data)?;
        for finger in &fingers {
            matcher.compile(finger).map_err(|e| {
                RsprayError::RuleCompileError(format!("{}: {}", finger.name, e))
            })?;
        }
        Ok(fingers)
    }

    /// 解析规则字典，值必须为字符串
    pub fn parse_rules(data: &[u8]) -> RspResult<HashMap<String, String>> {
        let raw: HashMap<String, Value> = serde_json::from_slice(data)?;
        let mut rules = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            match value {
                Value::String(s) => {
                    rules.insert(key, s);
                }
                other => {
                    return Err(RsprayError::RuleParseError(format!(
                        "rule `{}` must be a string, got {}",
                        key, other
                    )));
                }
            }
        }
        Ok(rules)
    }

    /// 解析掩码关键字，值必须为数组，元素统一转为字符串
    pub fn parse_mask_keywords(data: &[u8]) -> RspResult<HashMap<String, Vec<String>>> {
        let raw: HashMap<String, Value> = serde_json::from_slice(data)?;
        let mut keywords = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let Value::Array(items) = value else {
                return Err(RsprayError::RuleParseError(format!(
                    "mask keyword `{}` must be an array",
                    key
                )));
            };
            let words = items.iter().map(Self::value_to_string).collect();
            keywords.insert(key, words);
        }
        Ok(keywords)
    }

    fn value_to_string(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        }
    }

    fn read_file(path: &Path) -> RspResult<Vec<u8>> {
        fs::read(path).map_err(|e| {
            RsprayError::RuleLoadError(format!("{}: {}", path.display(), e))
        })
    }
}
