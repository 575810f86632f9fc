//! 全局配置管理,存储所有可配置项

/// 页面抓取模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// 轻量HTTP抓取（不执行JS，无法探测全局变量）
    #[default]
    Http,
    /// 无头浏览器渲染抓取（支持SSR/动态渲染，需开启browser特性）
    Browser,
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 单次请求超时（单位：秒）
    pub http_timeout: u64,
    // 批量探测并发数
    pub concurrency: usize,
    // 请求User-Agent
    pub user_agent: String,
    // 页面抓取模式
    pub fetch_mode: FetchMode,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            http_timeout: 10,
            concurrency: 5,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36"
                .to_string(),
            fetch_mode: FetchMode::Http,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    pub fn fetch_mode(mut self, mode: FetchMode) -> Self {
        self.config.fetch_mode = mode;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
