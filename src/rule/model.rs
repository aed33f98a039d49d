//! 指纹规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// 指纹定义（从指纹库 JSON 解析）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Finger {
    pub name: String,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    // 检测规则
    #[serde(rename = "rule", default)]
    pub rules: Vec<DetectRule>,
}

fn default_protocol() -> String {
    "http".to_string()
}

/// 单条检测规则
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DetectRule {
    // 主动探测时发送的请求路径/内容，空串表示无
    #[serde(rename = "send_data", default)]
    pub send_data: String,
    #[serde(default)]
    pub favicon: Option<Favicon>,
    // 内容匹配规则，交由外部匹配器解释
    #[serde(default)]
    pub regexps: Option<serde_json::Value>,
}

/// favicon 哈希（两种独立哈希方案）
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Favicon {
    #[serde(default)]
    pub md5: Vec<String>,
    #[serde(default)]
    pub mmh3: Vec<String>,
}

/// 识别来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkSource {
    Finger,
    FaviconMd5,
    FaviconMmh3,
}

/// 识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub from: FrameworkSource,
}

impl Framework {
    /// 从名称快速创建（无版本）
    pub fn new(name: impl Into<String>, from: FrameworkSource) -> Self {
        Self {
            name: name.into(),
            version: None,
            from,
        }
    }
}

// ======== 为 Framework 实现 Display trait（用于报告输出） ========
impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) if !v.is_empty() => write!(f, "{} {}", self.name, v),
            _ => write!(f, "{}", self.name),
        }
    }
}

/// 加载完成的模板集合
#[derive(Debug, Clone, Default)]
pub struct Templates {
    pub fingers: Vec<Finger>,
    pub rules: HashMap<String, String>,
    pub mask_keywords: HashMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finger_deserialize() {
        let json = r#"{
            "name": "tomcat",
            "rule": [
                {"regexps": {"body": ["Apache Tomcat"]}, "favicon": {"md5": ["4644f2d45601037b8423d45e13194c93"]}},
                {"send_data": "/manager/html"}
            ]
        }"#;
        let finger: Finger = serde_json::from_str(json).unwrap();

        assert_eq!(finger.name, "tomcat");
        assert_eq!(finger.protocol, "http");
        assert_eq!(finger.rules.len(), 2);
        let favicon = finger.rules[0].favicon.as_ref().unwrap();
        assert_eq!(favicon.md5, vec!["4644f2d45601037b8423d45e13194c93"]);
        assert!(favicon.mmh3.is_empty());
        assert_eq!(finger.rules[0].send_data, "");
        assert_eq!(finger.rules[1].send_data, "/manager/html");
    }

    #[test]
    fn test_finger_ignores_tag_field() {
        // 指纹库中的 tag 字段不参与索引与检测，解析时忽略
        let json = r#"{"name": "weblogic", "tag": ["oa"], "protocol": "tcp"}"#;
        let finger: Finger = serde_json::from_str(json).unwrap();

        assert_eq!(finger.name, "weblogic");
        assert_eq!(finger.protocol, "tcp");
        assert!(finger.rules.is_empty());
        let value = serde_json::to_value(&finger).unwrap();
        assert!(value.get("tag").is_none());
    }

    #[test]
    fn test_framework_display() {
        let mut frame = Framework::new("nginx", FrameworkSource::Finger);
        assert_eq!(frame.to_string(), "nginx");
        frame.version = Some("1.21.6".to_string());
        assert_eq!(frame.to_string(), "nginx 1.21.6");
    }
}
