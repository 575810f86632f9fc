//! 提取模块：HTML流式标签提取
pub mod html_extractor;

pub use self::html_extractor::HtmlExtractor;
