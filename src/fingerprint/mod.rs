//! 指纹模块：指纹数据模型与内置React指纹库
pub mod model;
pub mod react;

// 导出核心接口
pub use self::model::{AuxiliaryGroup, FingerprintCatalog};
pub use self::react::REACT_FINGERPRINTS;
