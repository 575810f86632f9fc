//! 批量探测输入文件解析
//! 每行一个URL，非 http:// / https:// 开头的行一律忽略

use std::path::Path;

use tracing::debug;

use crate::error::{ReactScanError, RsResult};

/// URL文件加载器
pub struct UrlFileLoader;

impl UrlFileLoader {
    /// 读取并过滤URL列表；有效URL为空时在任何抓取开始前整体报错
    pub async fn load(path: &Path) -> RsResult<Vec<String>> {
        let content = tokio::fs::read_to_string(path).await?;
        let urls = Self::parse(&content);
        if urls.is_empty() {
            return Err(ReactScanError::InvalidInput(
                "文件中无有效URL（需以http/https开头）".to_string(),
            ));
        }
        debug!("从 {} 读取到 {} 个有效URL", path.display(), urls.len());
        Ok(urls)
    }

    /// 逐行过滤：保留以 http:// 或 https:// 开头的行（顺序不变）
    fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("http://") || line.starts_with("https://"))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_invalid_lines() {
        let content = "\
https://a.com
# 注释行
ftp://ignored.com
  http://b.com

example.com";
        assert_eq!(
            UrlFileLoader::parse(content),
            vec!["https://a.com", "http://b.com"]
        );
    }

    #[test]
    fn test_parse_preserves_order() {
        let content = "https://z.com\nhttps://a.com\nhttps://m.com";
        assert_eq!(
            UrlFileLoader::parse(content),
            vec!["https://z.com", "https://a.com", "https://m.com"]
        );
    }

    #[tokio::test]
    async fn test_load_empty_file_is_error() {
        let path = std::env::temp_dir().join("rsreactscan_empty_urls.txt");
        tokio::fs::write(&path, "no valid urls here\n").await.unwrap();

        let err = UrlFileLoader::load(&path).await.unwrap_err();
        assert!(matches!(err, ReactScanError::InvalidInput(_)));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_load_valid_file() {
        let path = std::env::temp_dir().join("rsreactscan_urls.txt");
        tokio::fs::write(&path, "https://a.com\nbad line\nhttp://b.com\n")
            .await
            .unwrap();

        let urls = UrlFileLoader::load(&path).await.unwrap();
        assert_eq!(urls, vec!["https://a.com", "http://b.com"]);

        let _ = tokio::fs::remove_file(&path).await;
    }
}
