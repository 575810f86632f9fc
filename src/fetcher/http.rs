//! 轻量HTTP抓取器
//! 不执行JS，无法探测全局变量；脚本相对路径按最终URL补全为绝对URL

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{FetchResult, PageFetcher};
use crate::config::GlobalConfig;
use crate::error::{ReactScanError, RsResult};
use crate::extractor::HtmlExtractor;

/// HTTP抓取器（reqwest默认自动跟随重定向）
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// 创建HTTP抓取器
    pub fn new(config: &GlobalConfig) -> RsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// 将script-src补全为绝对URL（按最终URL解析相对路径，解析失败则丢弃）
    fn resolve_script_urls(base_url: &str, srcs: Vec<String>) -> Vec<String> {
        let base = Url::parse(base_url).ok();
        srcs.into_iter()
            .filter_map(|src| match &base {
                Some(b) => b.join(&src).map(|u| u.to_string()).ok(),
                None => Url::parse(&src).map(|u| u.to_string()).ok(),
            })
            .collect()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> FetchResult {
        let mut result = FetchResult::default();

        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                result.error = Some(format!("页面加载失败: {}", e));
                return result;
            }
        };

        // 记录最终跳转后的URL
        let final_url = response.url().to_string();
        result.final_url = Some(final_url.clone());

        if !response.status().is_success() {
            result.error = Some(format!(
                "HTTP状态码异常: {}（最终URL：{}）",
                response.status().as_u16(),
                final_url
            ));
            return result;
        }

        let html = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                result.error = Some(format!("页面加载失败: {}", e));
                return result;
            }
        };

        let srcs = HtmlExtractor::new().extract(&html).get_script_srcs();
        result.script_urls = Self::resolve_script_urls(&final_url, srcs);
        debug!("页面抓取完成：{}，脚本数：{}", final_url, result.script_urls.len());

        result.html = Some(html);
        result
    }

    async fn fetch_script(&self, url: &str) -> RsResult<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ReactScanError::DetectError(format!(
                "脚本请求返回状态码 {}：{}",
                response.status().as_u16(),
                url
            )));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_script_urls() {
        let resolved = HttpFetcher::resolve_script_urls(
            "https://example.com/app/index.html",
            vec![
                "/static/js/main.js".to_string(),
                "chunk.js".to_string(),
                "https://cdn.example.com/react.js".to_string(),
            ],
        );
        assert_eq!(
            resolved,
            vec![
                "https://example.com/static/js/main.js",
                "https://example.com/app/chunk.js",
                "https://cdn.example.com/react.js",
            ]
        );
    }

    #[test]
    fn test_resolve_with_invalid_base() {
        // base无法解析时仅保留本身即为绝对URL的条目
        let resolved = HttpFetcher::resolve_script_urls(
            "not a url",
            vec![
                "/static/js/main.js".to_string(),
                "https://cdn.example.com/react.js".to_string(),
            ],
        );
        assert_eq!(resolved, vec!["https://cdn.example.com/react.js"]);
    }
}
