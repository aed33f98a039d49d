//! 全局指纹注册表单例管理
//! 启动阶段一次性加载并发布，发布后只读；加载失败不发布任何内容
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::builder::{FingerprintIndex, FingerprintIndexBuilder};
use crate::config::GlobalConfig;
use crate::error::{RspResult, RsprayError};
use crate::rule::{FingerMatcher, Framework, TemplateLoader, Templates};

/// 全局注册表内容
pub struct Registry {
    pub index: FingerprintIndex,
    pub rules: HashMap<String, String>,
    pub mask_keywords: HashMap<String, Vec<String>>,
    matcher: Arc<dyn FingerMatcher>,
}

impl Registry {
    /// 由已加载的模板构建
    pub fn from_templates(templates: Templates, matcher: Arc<dyn FingerMatcher>) -> Self {
        let Templates {
            fingers,
            rules,
            mask_keywords,
        } = templates;

        Self {
            index: FingerprintIndexBuilder::build(fingers),
            rules,
            mask_keywords,
            matcher,
        }
    }

    /// 使用注册时注入的匹配器检测内容
    pub fn finger_detect(&self, content: &str) -> Vec<Framework> {
        self.index.detect(self.matcher.as_ref(), content)
    }
}

/// 全局注册表实例
static GLOBAL_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// 从配置的模板目录初始化全局注册表（重复调用直接返回）
pub fn init_registry(config: &GlobalConfig, matcher: Arc<dyn FingerMatcher>) -> RspResult<()> {
    if GLOBAL_REGISTRY.get().is_some() {
        return Ok(());
    }

    let templates = TemplateLoader::load(config, matcher.as_ref())?;
    init_registry_with_templates(templates, matcher)
}

/// 由已加载的模板初始化全局注册表（重复调用直接返回）
pub fn init_registry_with_templates(
    templates: Templates,
    matcher: Arc<dyn FingerMatcher>,
) -> RspResult<()> {
    let mut built = false;
    GLOBAL_REGISTRY.get_or_init(|| {
        built = true;
        Registry::from_templates(templates, matcher)
    });

    if built {
        debug!("全局指纹注册表初始化完成");
    } else {
        warn!("全局指纹注册表已初始化，忽略本次模板");
    }
    Ok(())
}

/// 获取全局注册表
pub fn global_registry() -> RspResult<&'static Registry> {
    GLOBAL_REGISTRY.get().ok_or(RsprayError::RegistryNotInitialized)
}

/// 使用全局注册表检测内容
pub fn finger_detect(content: &str) -> RspResult<Vec<Framework>> {
    Ok(global_registry()?.finger_detect(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::rule::{Finger, FrameworkSource};

    struct NameMatcher;

    impl FingerMatcher for NameMatcher {
        fn match_content(&self, finger: &Finger, content: &str) -> Option<Framework> {
            content
                .contains(&finger.name)
                .then(|| Framework::new(finger.name.clone(), FrameworkSource::Finger))
        }
    }

    // 全局单例在进程内只能发布一次，生命周期断言集中在同一个测试里
    #[test]
    fn test_registry_lifecycle() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        // 1. 初始化前不可用
        assert!(matches!(global_registry(), Err(RsprayError::RegistryNotInitialized)));
        assert!(finger_detect("nginx").is_err());

        // 2. 加载失败不发布
        let missing = ConfigManager::custom()
            .template_dir(std::env::temp_dir().join("rspray-registry-missing"))
            .build();
        assert!(init_registry(&missing, Arc::new(NameMatcher)).is_err());
        assert!(global_registry().is_err());

        // 3. 成功发布
        let templates = TemplateLoader::from_slices(
            br#"[{"name": "nginx", "rule": [{"favicon": {"md5": ["abc"]}, "send_data": "/status"}]}]"#,
            br#"{"bak": "{?0}.bak"}"#,
            br#"{"year": [2024]}"#,
            &NameMatcher,
        )
        .unwrap();
        init_registry_with_templates(templates, Arc::new(NameMatcher)).unwrap();

        let registry = global_registry().unwrap();
        assert_eq!(registry.index.match_favicon_md5("abc"), Some("nginx"));
        assert_eq!(registry.index.active_paths(), &["/status"]);
        assert_eq!(registry.rules["bak"], "{?0}.bak");
        assert_eq!(registry.mask_keywords["year"], vec!["2024"]);
        assert_eq!(finger_detect("Server: nginx").unwrap().len(), 1);

        // 4. 重复初始化不覆盖
        init_registry_with_templates(Templates::default(), Arc::new(NameMatcher)).unwrap();
        assert_eq!(global_registry().unwrap().index.fingers().len(), 1);
    }
}
