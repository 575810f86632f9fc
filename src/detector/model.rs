//! 探测结果数据模型定义
//! 仅存储结果数据，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 探测结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verdict {
    /// 确认使用React
    Confirmed,
    /// 疑似使用React（证据不足）
    Suspected,
    /// 未检出
    #[default]
    NotDetected,
}

impl Verdict {
    /// 按证据数量判定结论
    ///
    /// 核心证据单条即定性；辅助证据单条仅疑似，两条及以上共同定性：
    /// `Confirmed` ⟺ core≥1 或 aux≥2；`Suspected` ⟺ core==0 且 aux==1；
    /// 其余为 `NotDetected`
    pub fn from_counts(core_count: usize, aux_count: usize) -> Self {
        if core_count >= 1 {
            Verdict::Confirmed
        } else if aux_count >= 2 {
            Verdict::Confirmed
        } else if aux_count == 1 {
            Verdict::Suspected
        } else {
            Verdict::NotDetected
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Confirmed => write!(f, "✅ 使用React"),
            Verdict::Suspected => write!(f, "⚠️  未使用React（疑似但证据不足）"),
            Verdict::NotDetected => write!(f, "❌ 未使用React"),
        }
    }
}

/// 单个URL的探测结果
///
/// 由单目标探测器填充，返回后不再变更；批量探测中每个输入URL
/// 恰好对应一条结果，抓取失败的目标以 `error` 形式保留而非丢弃
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// 原始输入URL
    pub url: String,
    /// 最终访问的URL（含重定向）
    pub final_url: String,
    /// 探测结论
    pub verdict: Verdict,
    /// 核心证据（去重保序）
    pub core_evidence: Vec<String>,
    /// 辅助证据（去重保序）
    pub aux_evidence: Vec<String>,
    /// 致命抓取错误（仅主页面抓取失败时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionResult {
    /// 创建空结果（结论默认未检出）
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            final_url: url.to_string(),
            verdict: Verdict::default(),
            core_evidence: Vec::new(),
            aux_evidence: Vec::new(),
            error: None,
        }
    }

    /// 创建失败结果
    pub fn failed(url: &str, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_truth_table() {
        // core>=1 无条件定性，与辅助证据数量无关
        assert_eq!(Verdict::from_counts(1, 0), Verdict::Confirmed);
        assert_eq!(Verdict::from_counts(3, 1), Verdict::Confirmed);
        assert_eq!(Verdict::from_counts(1, 5), Verdict::Confirmed);
        // core==0 时由辅助证据数量决定
        assert_eq!(Verdict::from_counts(0, 0), Verdict::NotDetected);
        assert_eq!(Verdict::from_counts(0, 1), Verdict::Suspected);
        assert_eq!(Verdict::from_counts(0, 2), Verdict::Confirmed);
        assert_eq!(Verdict::from_counts(0, 6), Verdict::Confirmed);
    }

    #[test]
    fn test_default_verdict_is_not_detected() {
        let result = DetectionResult::new("https://example.com");
        assert_eq!(result.verdict, Verdict::NotDetected);
        assert_eq!(result.final_url, "https://example.com");
        assert!(result.error.is_none());
    }
}
