//! 抓取模块：页面与脚本抓取能力抽象
//! 两种可互换实现：轻量HTTP抓取 / 无头浏览器渲染抓取（browser特性）

pub mod http;

#[cfg(feature = "browser")]
pub mod browser;

use async_trait::async_trait;

use crate::error::RsResult;

pub use self::http::HttpFetcher;

#[cfg(feature = "browser")]
pub use self::browser::ChromiumFetcher;

/// 单个目标的页面抓取原始数据
///
/// 抓取完成后 `html` 与 `error` 恰有一个存在；抓取层错误一律转为
/// 描述字符串写入 `error`，不跨目标边界抛出
#[derive(Debug, Clone, Default)]
pub struct FetchResult {
    /// 页面HTML（浏览器模式下为渲染后的最终DOM）
    pub html: Option<String>,
    /// 页面引用的脚本绝对URL（按出现顺序，不要求去重）
    pub script_urls: Vec<String>,
    /// 确认存在的运行时全局变量（仅浏览器模式，HTTP模式恒为空）
    pub global_vars: Vec<String>,
    /// 跟随重定向后的最终URL
    pub final_url: Option<String>,
    /// 致命抓取错误描述
    pub error: Option<String>,
}

/// 页面抓取器接口
///
/// 契约：必须透明跟随HTTP重定向并回报最终URL；普通HTTP错误状态码
/// 不抛异常，转为 `FetchResult.error` 描述字符串
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面（HTML + 脚本URL + 全局变量 + 最终URL）
    async fn fetch_page(&self, url: &str) -> FetchResult;

    /// 抓取单个脚本源码（失败由调用方静默吸收）
    async fn fetch_script(&self, url: &str) -> RsResult<String>;
}
