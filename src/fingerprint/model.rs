//! 指纹数据模型定义
//! 仅存储指纹数据，无任何业务逻辑；构建后只读，探测过程中不可变

/// 辅助证据组：组内所有关键词必须出现在同一份JS源码中才计为一条证据
#[derive(Debug, Clone, Copy)]
pub struct AuxiliaryGroup {
    /// 共现关键词（逻辑AND）
    pub keywords: &'static [&'static str],
    /// 证据描述
    pub desc: &'static str,
}

/// 指纹库：核心证据单条即可定性；辅助证据需两组及以上共同定性
#[derive(Debug, Clone, Copy)]
pub struct FingerprintCatalog {
    /// 运行时全局变量（存在即核心证据，仅浏览器渲染模式可探测）
    pub global_vars: &'static [&'static str],
    /// DOM专属属性名（出现在任意元素上即核心证据，属性值无关）
    pub dom_attrs: &'static [&'static str],
    /// JS URL特征子串（大小写不敏感）
    pub js_url_patterns: &'static [&'static str],
    /// JS源码核心关键词（大小写不敏感）
    pub js_keywords: &'static [&'static str],
    /// 辅助证据组（按定义顺序评估）
    pub auxiliary: &'static [AuxiliaryGroup],
}
