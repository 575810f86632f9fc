//! 无头浏览器渲染抓取器（chromiumoxide）
//! 支持SSR/动态渲染站点；可在渲染上下文中探测运行时全局变量
//! 脚本源码仍走HTTP抓取（与页面渲染互不影响）

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use reqwest::Client;
use tracing::debug;

use super::{FetchResult, PageFetcher};
use crate::config::GlobalConfig;
use crate::error::{ReactScanError, RsResult};
use crate::fingerprint::REACT_FINGERPRINTS;

/// 浏览器渲染抓取器：单浏览器实例，每次抓取开新页签
pub struct ChromiumFetcher {
    browser: Browser,
    script_client: Client,
    config: GlobalConfig,
}

impl ChromiumFetcher {
    /// 启动无头浏览器并创建抓取器
    pub async fn new(config: &GlobalConfig) -> RsResult<Self> {
        let browser_config = BrowserConfig::builder()
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .build()
            .map_err(ReactScanError::BrowserError)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ReactScanError::BrowserError(format!("浏览器启动失败: {}", e)))?;

        // CDP事件循环，随浏览器实例存活
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let script_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            browser,
            script_client,
            config: config.clone(),
        })
    }

    /// 渲染页面并采集HTML/脚本URL/全局变量/最终URL
    async fn render(&self, url: &str) -> RsResult<FetchResult> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| ReactScanError::BrowserError(format!("页签创建失败: {}", e)))?;

        if let Err(e) = page.set_user_agent(self.config.user_agent.as_str()).await {
            debug!("User-Agent设置失败（忽略）：{}", e);
        }

        let timeout = Duration::from_secs(self.config.http_timeout);
        match tokio::time::timeout(timeout, page.goto(url)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                let _ = page.close().await;
                return Err(ReactScanError::BrowserError(format!("页面导航失败: {}", e)));
            }
            Err(_) => {
                let _ = page.close().await;
                return Err(ReactScanError::BrowserError(format!(
                    "页面加载超时（{}秒）",
                    self.config.http_timeout
                )));
            }
        }
        let _ = page.wait_for_navigation().await;

        let html = match page.content().await {
            Ok(html) => html,
            Err(e) => {
                let _ = page.close().await;
                return Err(ReactScanError::BrowserError(format!("页面内容读取失败: {}", e)));
            }
        };

        // 最终URL（重定向后）；读取失败时回退为原始URL
        let final_url = page
            .url()
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| url.to_string());

        // 渲染后DOM中的脚本绝对URL（浏览器已补全相对路径）
        let script_urls = Self::eval_json::<Vec<String>>(
            &page,
            "Array.from(document.querySelectorAll('script[src]')).map(el => el.src)",
        )
        .await
        .unwrap_or_default();

        // 探测候选全局变量（含 React 18+ 新增）
        let mut global_vars = Vec::new();
        for var in REACT_FINGERPRINTS.global_vars {
            let expr = format!("typeof {} !== 'undefined'", var);
            if Self::eval_json::<bool>(&page, &expr).await.unwrap_or(false) {
                global_vars.push((*var).to_string());
            }
        }

        let _ = page.close().await;

        Ok(FetchResult {
            html: Some(html),
            script_urls,
            global_vars,
            final_url: Some(final_url),
            error: None,
        })
    }

    /// 在页面上下文执行JS并反序列化返回值（失败返回None）
    async fn eval_json<T: serde::de::DeserializeOwned>(page: &Page, expr: &str) -> Option<T> {
        page.evaluate(expr).await.ok()?.into_value::<T>().ok()
    }
}

#[async_trait]
impl PageFetcher for ChromiumFetcher {
    async fn fetch_page(&self, url: &str) -> FetchResult {
        match self.render(url).await {
            Ok(result) => result,
            Err(e) => FetchResult {
                error: Some(format!("浏览器页面加载失败: {}", e)),
                ..FetchResult::default()
            },
        }
    }

    async fn fetch_script(&self, url: &str) -> RsResult<String> {
        let response = self.script_client.get(url).send().await?;
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
