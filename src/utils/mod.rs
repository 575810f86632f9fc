//! 工具模块
pub mod url_file;

pub use self::url_file::UrlFileLoader;
