//! 探测模块：React探测核心逻辑
pub mod global;
pub mod analyzer;
pub mod detector;
pub mod model;

// 导出核心接口
pub use self::global::{
    init_react_detector, init_react_detector_with_config,
    detect_react, detect_react_batch,
};
pub use self::detector::ReactDetector;
pub use self::model::{DetectionResult, Verdict};
pub use self::analyzer::{
    GlobalVarAnalyzer, DomAttrAnalyzer, ScriptUrlAnalyzer,
    ScriptContentAnalyzer, ScriptEvidence,
};
