//! 信号分析器：从抓取产物中提取证据
//! 全部为无状态纯函数；残缺或缺失的输入不报错，仅产出零证据

use std::collections::HashSet;

use crate::extractor::HtmlExtractor;
use crate::fingerprint::FingerprintCatalog;

/// 全局变量分析器
pub struct GlobalVarAnalyzer;

impl GlobalVarAnalyzer {
    /// 按指纹库定义顺序，对已确认存在的全局变量逐条产出核心证据
    pub fn analyze(catalog: &FingerprintCatalog, observed_vars: &[String]) -> Vec<String> {
        catalog
            .global_vars
            .iter()
            .filter(|var| observed_vars.iter().any(|observed| observed == **var))
            .map(|var| format!("[核心] 存在React全局变量: {}", var))
            .collect()
    }
}

/// DOM属性分析器
pub struct DomAttrAnalyzer;

impl DomAttrAnalyzer {
    /// 任意元素携带指纹属性即产出核心证据（属性值无关，仅看存在性）
    pub fn analyze(catalog: &FingerprintCatalog, html: &str) -> Vec<String> {
        HtmlExtractor::with_markers(catalog.dom_attrs)
            .extract(html)
            .get_matched_markers()
            .into_iter()
            .map(|attr| format!("[核心] DOM含React专属属性: {}", attr))
            .collect()
    }
}

/// JS URL分析器
pub struct ScriptUrlAnalyzer;

impl ScriptUrlAnalyzer {
    /// 大小写不敏感子串匹配，每个(URL, 特征)命中产出一条核心证据
    /// 跨URL的重复命中在聚合阶段统一去重
    pub fn analyze(catalog: &FingerprintCatalog, script_urls: &[String]) -> Vec<String> {
        let mut evidence = Vec::new();
        for js_url in script_urls {
            let url_lower = js_url.to_lowercase();
            for pattern in catalog.js_url_patterns {
                if url_lower.contains(&pattern.to_lowercase()) {
                    evidence.push(format!(
                        "[核心] JS URL含React特征: {}（匹配：{}）",
                        js_url, pattern
                    ));
                }
            }
        }
        evidence
    }
}

/// 单份JS源码的扫描产出
#[derive(Debug, Clone, Default)]
pub struct ScriptEvidence {
    pub core: Vec<String>,
    pub auxiliary: Vec<String>,
}

/// JS源码分析器
pub struct ScriptContentAnalyzer;

impl ScriptContentAnalyzer {
    /// 大小写不敏感扫描：核心关键词逐条计证据；
    /// 辅助组要求组内全部关键词出现在同一份源码中（跨脚本命中不计）
    pub fn analyze(catalog: &FingerprintCatalog, script_body: &str) -> ScriptEvidence {
        let mut result = ScriptEvidence::default();
        let body_lower = script_body.to_lowercase();

        for keyword in catalog.js_keywords {
            if body_lower.contains(&keyword.to_lowercase()) {
                result.core.push(format!("JS源码含React核心API: {}", keyword));
            }
        }

        for group in catalog.auxiliary {
            let all_matched = group
                .keywords
                .iter()
                .all(|kw| body_lower.contains(&kw.to_lowercase()));
            if all_matched {
                result.auxiliary.push(format!(
                    "{}（匹配：{}）",
                    group.desc,
                    group.keywords.join(", ")
                ));
            }
        }

        result
    }
}

/// 证据去重：按完整描述精确去重，保留首次出现顺序
pub fn dedup_evidence(evidence: &mut Vec<String>) {
    let mut seen = HashSet::new();
    evidence.retain(|item| seen.insert(item.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::REACT_FINGERPRINTS;

    #[test]
    fn test_global_var_analyzer() {
        let observed = vec![
            "window.ReactDOM".to_string(),
            "window.jQuery".to_string(),
        ];
        let evidence = GlobalVarAnalyzer::analyze(&REACT_FINGERPRINTS, &observed);
        assert_eq!(
            evidence,
            vec!["[核心] 存在React全局变量: window.ReactDOM"]
        );
    }

    #[test]
    fn test_global_var_analyzer_empty_observed() {
        let evidence = GlobalVarAnalyzer::analyze(&REACT_FINGERPRINTS, &[]);
        assert!(evidence.is_empty());
    }

    #[test]
    fn test_dom_attr_analyzer() {
        let html = r#"<div id="app" data-reactroot=""></div>"#;
        let evidence = DomAttrAnalyzer::analyze(&REACT_FINGERPRINTS, html);
        assert_eq!(evidence, vec!["[核心] DOM含React专属属性: data-reactroot"]);
    }

    #[test]
    fn test_dom_attr_analyzer_no_match() {
        let html = r#"<div id="app" data-vue-app=""></div>"#;
        assert!(DomAttrAnalyzer::analyze(&REACT_FINGERPRINTS, html).is_empty());
    }

    #[test]
    fn test_script_url_analyzer_case_insensitive() {
        let urls = vec!["https://cdn.example.com/React.Production.Min.JS".to_string()];
        let evidence = ScriptUrlAnalyzer::analyze(&REACT_FINGERPRINTS, &urls);
        assert_eq!(evidence.len(), 1);
        assert!(evidence[0].contains("匹配：react.production.min.js"));
    }

    #[test]
    fn test_script_url_analyzer_duplicates_allowed_per_url() {
        let urls = vec![
            "https://a.example.com/react.js".to_string(),
            "https://b.example.com/react.js".to_string(),
        ];
        let evidence = ScriptUrlAnalyzer::analyze(&REACT_FINGERPRINTS, &urls);
        // 本阶段允许跨URL重复命中（URL不同，描述不同）
        assert_eq!(evidence.len(), 2);
    }

    #[test]
    fn test_script_content_core_keywords() {
        let body = "var e=React.createElement('div');useState(0);";
        let evidence = ScriptContentAnalyzer::analyze(&REACT_FINGERPRINTS, body);
        assert!(evidence
            .core
            .contains(&"JS源码含React核心API: React.createElement".to_string()));
        assert!(evidence
            .core
            .contains(&"JS源码含React核心API: useState".to_string()));
    }

    #[test]
    fn test_auxiliary_group_requires_all_keywords() {
        // 仅 render() 不足以命中任何辅助组
        let body = "function render() { return null; }";
        let evidence = ScriptContentAnalyzer::analyze(&REACT_FINGERPRINTS, body);
        assert!(evidence.auxiliary.is_empty());

        // render() + this.props 同时出现才命中「组件属性引用」组
        let body = "render() { return this.props.children; }";
        let evidence = ScriptContentAnalyzer::analyze(&REACT_FINGERPRINTS, body);
        assert!(evidence
            .auxiliary
            .iter()
            .any(|e| e.starts_with("React 组件属性引用")));
    }

    #[test]
    fn test_auxiliary_split_across_scripts_not_counted() {
        // 同一组关键词分散在两份源码中，各自均不命中该组
        let body_a = ScriptContentAnalyzer::analyze(&REACT_FINGERPRINTS, "render() {}");
        let body_b = ScriptContentAnalyzer::analyze(&REACT_FINGERPRINTS, "x = this.props;");
        assert!(body_a.auxiliary.is_empty());
        assert!(body_b.auxiliary.is_empty());
    }

    #[test]
    fn test_malformed_input_yields_no_evidence() {
        let evidence = ScriptContentAnalyzer::analyze(&REACT_FINGERPRINTS, "");
        assert!(evidence.core.is_empty());
        assert!(evidence.auxiliary.is_empty());

        assert!(DomAttrAnalyzer::analyze(&REACT_FINGERPRINTS, "<<<>>>").is_empty());
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let mut evidence = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        dedup_evidence(&mut evidence);
        assert_eq!(evidence, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dedup_idempotent() {
        let mut evidence: Vec<String> = ["x", "y", "x"].iter().map(|s| s.to_string()).collect();
        dedup_evidence(&mut evidence);
        let once = evidence.clone();
        dedup_evidence(&mut evidence);
        assert_eq!(evidence, once);
    }
}
