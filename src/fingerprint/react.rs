//! React指纹库（适配 React 18+ 新特征）
//! 进程级只读静态数据，启动时构建一次，全程无需同步即可跨任务共享

use once_cell::sync::Lazy;

use super::model::{AuxiliaryGroup, FingerprintCatalog};

/// React指纹库全局单例
pub static REACT_FINGERPRINTS: Lazy<FingerprintCatalog> = Lazy::new(|| FingerprintCatalog {
    global_vars: &[
        "window.React",
        "window.ReactDOM",
        "window.__REACT_DEVTOOLS_GLOBAL_HOOK__",
        "window.ReactDOMClient", // React 18+ 新增（createRoot 所在模块）
    ],
    dom_attrs: &[
        "data-reactroot",
        "data-reactid",
        "data-react-checksum",
        "data-react-server-components", // React 18+ SSR 特征
    ],
    js_url_patterns: &[
        "react.js",
        "react-dom.js",
        "react.production.min.js",
        "react-dom.production.min.js",
        "chunk-react-",
        "vendors~react~",
        "jsx-runtime",      // React 18+ JSX 运行时
        "react-server",     // React 18+ 服务端组件
        "react-dom-client", // React 18+ DOM 客户端模块
    ],
    js_keywords: &[
        "React.createElement",
        "jsx(",
        "jsxs(",
        "useState",
        "useEffect",
        "React.createRoot",    // React 18+ 核心渲染 API
        "ReactDOM.createRoot", // React 18+ 兼容写法
        "react-router",
        "react-redux",
        "antd",
    ],
    auxiliary: &[
        AuxiliaryGroup {
            keywords: &["render()", "React.Component"],
            desc: "React 类组件核心方法",
        },
        AuxiliaryGroup {
            keywords: &["render()", "React.PureComponent"],
            desc: "React 纯组件核心方法",
        },
        AuxiliaryGroup {
            keywords: &["render()", "this.props"],
            desc: "React 组件属性引用",
        },
        AuxiliaryGroup {
            keywords: &["render()", "this.state"],
            desc: "React 组件状态引用",
        },
        AuxiliaryGroup {
            keywords: &["componentDidMount", "componentDidUpdate"],
            desc: "React 生命周期方法",
        },
        AuxiliaryGroup {
            keywords: &["createRoot", "React"],
            desc: "React 18+ 渲染方法",
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_non_empty() {
        let catalog = &*REACT_FINGERPRINTS;
        assert!(!catalog.global_vars.is_empty());
        assert!(!catalog.dom_attrs.is_empty());
        assert!(!catalog.js_url_patterns.is_empty());
        assert!(!catalog.js_keywords.is_empty());
        assert!(!catalog.auxiliary.is_empty());
    }

    #[test]
    fn test_auxiliary_groups_have_keywords() {
        for group in REACT_FINGERPRINTS.auxiliary {
            assert!(!group.keywords.is_empty(), "空关键词组：{}", group.desc);
            assert!(!group.desc.is_empty());
        }
    }
}
