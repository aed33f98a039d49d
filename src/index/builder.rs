//! 指纹索引构建
//! 将加载好的指纹构建为只读索引：favicon 哈希 -> 指纹名、主动探测路径列表

use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

use crate::rule::{Finger, FingerMatcher, Framework, FrameworkSource};

/// 只读指纹索引，构建完成后不再修改，可跨线程共享引用
#[derive(Debug, Clone, Default)]
pub struct FingerprintIndex {
    fingers: Vec<Finger>,
    md5_fingers: HashMap<String, String>,
    mmh3_fingers: HashMap<String, String>,
    active_paths: Vec<String>,
}

impl FingerprintIndex {
    /// 全部指纹（加载顺序）
    pub fn fingers(&self) -> &[Finger] {
        &self.fingers
    }

    /// md5 favicon 哈希 -> 指纹名
    pub fn md5_fingers(&self) -> &HashMap<String, String> {
        &self.md5_fingers
    }

    /// mmh3 favicon 哈希 -> 指纹名
    pub fn mmh3_fingers(&self) -> &HashMap<String, String> {
        &self.mmh3_fingers
    }

    /// 主动探测路径（按指纹、检测规则顺序，保留重复）
    pub fn active_paths(&self) -> &[String] {
        &self.active_paths
    }

    pub fn match_favicon_md5(&self, hash: &str) -> Option<&str> {
        self.md5_fingers.get(hash).map(String::as_str)
    }

    pub fn match_favicon_mmh3(&self, hash: &str) -> Option<&str> {
        self.mmh3_fingers.get(hash).map(String::as_str)
    }

    /// favicon 识别：先查 md5，再查 mmh3
    pub fn match_favicon(&self, md5: &str, mmh3: &str) -> Option<Framework> {
        if let Some(name) = self.match_favicon_md5(md5) {
            return Some(Framework::new(name, FrameworkSource::FaviconMd5));
        }
        self.match_favicon_mmh3(mmh3)
            .map(|name| Framework::new(name, FrameworkSource::FaviconMmh3))
    }

    /// 依次用外部匹配器检测每个指纹，按指纹顺序收集命中结果
    pub fn detect(&self, matcher: &dyn FingerMatcher, content: &str) -> Vec<Framework> {
        let frames: Vec<Framework> = self
            .fingers
            .iter()
            .filter_map(|finger| matcher.match_content(finger, content))
            .collect();

        debug!("指纹检测完成：检测{}条指纹，命中{}条", self.fingers.len(), frames.len());
        frames
    }
}

/// 指纹索引构建器
pub struct FingerprintIndexBuilder;

impl FingerprintIndexBuilder {
    /// 构建索引
    ///
    /// - send_data 非空的检测规则追加到主动探测路径
    /// - favicon 哈希写入对应映射，哈希冲突时后写入者覆盖
    pub fn build(fingers: Vec<Finger>) -> FingerprintIndex {
        let start = Instant::now();
        let mut md5_fingers = HashMap::new();
        let mut mmh3_fingers = HashMap::new();
        let mut active_paths = Vec::new();

        for finger in &fingers {
            for rule in &finger.rules {
                if !rule.send_data.is_empty() {
                    active_paths.push(rule.send_data.clone());
                }

                let Some(favicon) = &rule.favicon else {
                    continue;
                };
                for mmh3 in &favicon.mmh3 {
                    mmh3_fingers.insert(mmh3.clone(), finger.name.clone());
                }
                for md5 in &favicon.md5 {
                    md5_fingers.insert(md5.clone(), finger.name.clone());
                }
            }
        }

        debug!(
            "✅ 指纹索引构建完成，耗时{:?}：指纹{}条、md5哈希{}个、mmh3哈希{}个、主动路径{}条",
            start.elapsed(),
            fingers.len(),
            md5_fingers.len(),
            mmh3_fingers.len(),
            active_paths.len()
        );

        FingerprintIndex {
            fingers,
            md5_fingers,
            mmh3_fingers,
            active_paths,
        }
    }
}
