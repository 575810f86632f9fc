//! 全局探测器单例管理
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::detector::ReactDetector;
use super::model::DetectionResult;
use crate::error::{ReactScanError, RsResult};
use crate::config::{ConfigManager, GlobalConfig};

/// 全局探测器实例
static GLOBAL_DETECTOR: Lazy<Arc<OnceCell<ReactDetector>>> = Lazy::new(|| {
    Arc::new(OnceCell::new())
});

/// 初始化全局探测器（默认配置）
pub async fn init_react_detector() -> RsResult<()> {
    init_react_detector_with_config(ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局探测器
pub async fn init_react_detector_with_config(config: GlobalConfig) -> RsResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        return Ok(());
    }

    let detector = ReactDetector::new(config).await?;
    GLOBAL_DETECTOR.set(detector).map_err(|_| {
        ReactScanError::DetectorNotInitialized
    })?;

    Ok(())
}

/// 获取全局探测器
pub(crate) fn get_global_detector() -> RsResult<&'static ReactDetector> {
    GLOBAL_DETECTOR.get()
        .ok_or(ReactScanError::DetectorNotInitialized)
}

/// 单URL探测（使用全局探测器）
pub async fn detect_react(url: &str) -> RsResult<DetectionResult> {
    let detector = get_global_detector()?;
    Ok(detector.detect(url).await)
}

/// 批量探测（使用全局探测器）
pub async fn detect_react_batch(urls: &[String]) -> RsResult<Vec<DetectionResult>> {
    let detector = get_global_detector()?;
    Ok(detector.detect_batch(urls).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_global_detector_lifecycle() {
        // 未初始化时探测接口直接报错，不发起任何请求
        assert!(matches!(
            detect_react("https://example.com").await,
            Err(ReactScanError::DetectorNotInitialized)
        ));

        init_react_detector().await.unwrap();
        assert!(get_global_detector().is_ok());

        // 重复初始化幂等
        init_react_detector().await.unwrap();
    }
}
