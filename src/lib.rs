//! rsreactscan - Rust React资产探测工具

// 导出全局错误类型
pub use self::error::{ReactScanError, RsResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder, FetchMode};

// 导出指纹模块核心接口
pub use self::fingerprint::{
    FingerprintCatalog, AuxiliaryGroup, REACT_FINGERPRINTS
};

// 导出提取模块核心接口
pub use self::extractor::HtmlExtractor;

// 导出抓取模块核心接口
pub use self::fetcher::{PageFetcher, FetchResult, HttpFetcher};

#[cfg(feature = "browser")]
pub use self::fetcher::ChromiumFetcher;

// 导出工具模块核心接口
pub use self::utils::UrlFileLoader;

// 导出探测模块核心接口（含兼容简化接口）
pub use self::detector::{
    ReactDetector,
    DetectionResult,
    Verdict,
    init_react_detector,
    init_react_detector_with_config,
    detect_react,
    detect_react_batch,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod extractor;
pub mod fetcher;
pub mod utils;
pub mod detector;
pub mod report;
