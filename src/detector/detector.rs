//! 探测器核心：整合各类分析器，输出探测结果

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use super::analyzer::{
    dedup_evidence, DomAttrAnalyzer, GlobalVarAnalyzer, ScriptContentAnalyzer, ScriptEvidence,
    ScriptUrlAnalyzer,
};
use super::model::{DetectionResult, Verdict};
use crate::config::{FetchMode, GlobalConfig};
use crate::error::RsResult;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::fingerprint::{FingerprintCatalog, REACT_FINGERPRINTS};

/// React探测器
#[derive(Clone)]
pub struct ReactDetector {
    catalog: &'static FingerprintCatalog,
    fetcher: Arc<dyn PageFetcher>,
    config: GlobalConfig,
}

impl ReactDetector {
    /// 创建探测器（按配置选择抓取模式）
    pub async fn new(config: GlobalConfig) -> RsResult<Self> {
        let fetcher: Arc<dyn PageFetcher> = match config.fetch_mode {
            FetchMode::Http => Arc::new(HttpFetcher::new(&config)?),
            #[cfg(feature = "browser")]
            FetchMode::Browser => Arc::new(crate::fetcher::ChromiumFetcher::new(&config).await?),
            #[cfg(not(feature = "browser"))]
            FetchMode::Browser => {
                return Err(crate::error::ReactScanError::InvalidInput(
                    "浏览器渲染模式需以 --features browser 编译".to_string(),
                ));
            }
        };
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// 以自定义抓取器创建探测器（便于测试或替换抓取实现）
    pub fn with_fetcher(config: GlobalConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            catalog: &*REACT_FINGERPRINTS,
            fetcher,
            config,
        }
    }

    /// 单URL探测：抓取 → 静态提取 → 脚本并发扫描 → 聚合去重 → 判定
    ///
    /// 仅主页面抓取失败对本目标致命；脚本级失败一律静默吸收
    pub async fn detect(&self, url: &str) -> DetectionResult {
        let mut result = DetectionResult::new(url);

        // 1. 抓取页面（跟随重定向，记录最终URL）
        let page = self.fetcher.fetch_page(url).await;
        if let Some(final_url) = &page.final_url {
            result.final_url = final_url.clone();
        }
        if let Some(error) = page.error {
            result.error = Some(error);
            return result;
        }

        // 2. 静态提取：全局变量 → DOM属性 → JS URL
        result
            .core_evidence
            .extend(GlobalVarAnalyzer::analyze(self.catalog, &page.global_vars));
        if let Some(html) = &page.html {
            result
                .core_evidence
                .extend(DomAttrAnalyzer::analyze(self.catalog, html));
        }
        result
            .core_evidence
            .extend(ScriptUrlAnalyzer::analyze(self.catalog, &page.script_urls));

        // 3. 脚本源码并发扫描（目标内不限并发，单脚本失败产出零证据）
        let mut handles = Vec::with_capacity(page.script_urls.len());
        for js_url in &page.script_urls {
            let fetcher = Arc::clone(&self.fetcher);
            let catalog = self.catalog;
            let js_url = js_url.clone();
            handles.push(tokio::spawn(async move {
                match fetcher.fetch_script(&js_url).await {
                    Ok(body) => ScriptContentAnalyzer::analyze(catalog, &body),
                    Err(e) => {
                        debug!("脚本抓取失败（忽略）：{} - {}", js_url, e);
                        ScriptEvidence::default()
                    }
                }
            }));
        }
        // 按脚本原始顺序回收扫描结果
        for handle in handles {
            if let Ok(evidence) = handle.await {
                result.core_evidence.extend(evidence.core);
                result.aux_evidence.extend(evidence.auxiliary);
            }
        }

        // 4. 证据去重（按完整描述，保留首次出现顺序）
        dedup_evidence(&mut result.core_evidence);
        dedup_evidence(&mut result.aux_evidence);

        // 5. 判定
        result.verdict =
            Verdict::from_counts(result.core_evidence.len(), result.aux_evidence.len());
        result
    }

    /// 批量探测：信号量限制并发，输出顺序恒等于输入顺序
    ///
    /// 单目标的致命错误以结果形式保留，不取消、不阻断其他目标
    pub async fn detect_batch(&self, urls: &[String]) -> Vec<DetectionResult> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));

        let mut handles = Vec::with_capacity(urls.len());
        for url in urls {
            let detector = self.clone();
            let semaphore = Arc::clone(&semaphore);
            let url = url.clone();
            handles.push(tokio::spawn(async move {
                // 信号量全程不关闭，获取失败时退化为不限流
                let _permit = semaphore.acquire_owned().await.ok();
                detector.detect(&url).await
            }));
        }

        // 结果槽位由输入位置决定，与完成顺序无关
        let mut results = Vec::with_capacity(handles.len());
        for (url, handle) in urls.iter().zip(handles) {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => results.push(DetectionResult::failed(url, format!("探测任务异常: {}", e))),
            }
        }
        results
    }
}
