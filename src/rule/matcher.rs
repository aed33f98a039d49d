//! 外部内容匹配器接口
//! 指纹签名匹配算法不在本库内实现，调用方通过该 trait 注入

use super::model::{Finger, Framework};
use crate::error::RspResult;

/// 指纹内容匹配器
pub trait FingerMatcher: Send + Sync {
    /// 加载阶段预编译单个指纹；失败将中止整个加载流程
    fn compile(&self, _finger: &Finger) -> RspResult<()> {
        Ok(())
    }

    /// 对内容执行单个指纹匹配，命中返回识别结果
    fn match_content(&self, finger: &Finger, content: &str) -> Option<Framework>;
}
