//! rsreactscan 命令行入口

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use rsreactscan::{ConfigManager, FetchMode, ReactDetector, UrlFileLoader, report};

/// React资产探测工具 - 跟随重定向+适配React18+
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// 单个URL探测（例：https://reactjs.org）
    #[arg(short, long)]
    url: Option<String>,

    /// 批量探测（文件路径，每行一个URL）
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 请求超时时间（默认10秒）
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// 批量并发数（默认5）
    #[arg(short, long, default_value_t = 5)]
    concurrency: usize,

    /// 使用无头浏览器精准模式（支持SSR/动态渲染，需开启browser特性编译）
    #[arg(short, long)]
    browser: bool,

    /// 以JSON格式输出结果
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.url.is_none() && cli.file.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let fetch_mode = if cli.browser {
        FetchMode::Browser
    } else {
        FetchMode::Http
    };
    let config = ConfigManager::custom()
        .http_timeout(cli.timeout)
        .concurrency(cli.concurrency)
        .fetch_mode(fetch_mode)
        .build();

    let detector = ReactDetector::new(config)
        .await
        .context("探测器初始化失败")?;

    let results = if let Some(url) = &cli.url {
        vec![detector.detect(url).await]
    } else {
        // 前置校验已保证file存在
        let file = cli.file.as_ref().context("缺少输入文件")?;
        let urls = UrlFileLoader::load(file)
            .await
            .with_context(|| format!("读取文件失败: {}", file.display()))?;
        detector.detect_batch(&urls).await
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        report::print_results(&results);
    }

    Ok(())
}
