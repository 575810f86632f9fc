//! HTML标签提取器
//! 负责从HTML中提取script-src与指纹DOM属性（流式解析，容忍残缺HTML）

use std::cell::RefCell;
use std::collections::HashSet;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

#[derive(Debug, Default, Clone)]
pub struct HtmlExtractor {
    /// 待命中的DOM属性名（来自指纹库，属性值无关）
    dom_markers: &'static [&'static str],
    script_srcs: RefCell<Vec<String>>,
    matched_markers: RefCell<HashSet<&'static str>>,
}

impl TokenSink for HtmlExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name,
            attrs,
            ..
        }) = token
        {
            if name.as_ref() == "script" {
                self.extract_script_src(&attrs);
            }
            self.extract_dom_markers(&attrs);
        }
        TokenSinkResult::Continue
    }
}

impl HtmlExtractor {
    /// 创建新的提取器（仅提取script-src）
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带DOM属性指纹的提取器
    pub fn with_markers(dom_markers: &'static [&'static str]) -> Self {
        Self {
            dom_markers,
            ..Self::default()
        }
    }

    /// 从HTML字符串提取标签
    pub fn extract(&self, html: &str) -> Self {
        let tokenizer = Tokenizer::new(self.clone(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink
    }

    /// 提取script-src
    fn extract_script_src(&self, attrs: &[Attribute]) {
        for attr in attrs {
            if attr.name.local.as_ref() == "src" {
                self.script_srcs.borrow_mut().push(attr.value.to_string());
                break;
            }
        }
    }

    /// 记录任意元素上命中的指纹DOM属性（html5ever已将属性名归一为小写）
    fn extract_dom_markers(&self, attrs: &[Attribute]) {
        if self.dom_markers.is_empty() {
            return;
        }
        for attr in attrs {
            let local = attr.name.local.as_ref();
            if let Some(&marker) = self.dom_markers.iter().find(|&&m| m == local) {
                self.matched_markers.borrow_mut().insert(marker);
            }
        }
    }

    /// 获取提取到的script-src列表
    pub fn get_script_srcs(&self) -> Vec<String> {
        self.script_srcs.borrow().clone()
    }

    /// 获取命中的DOM属性（按指纹库定义顺序）
    pub fn get_matched_markers(&self) -> Vec<&'static str> {
        let matched = self.matched_markers.borrow();
        self.dom_markers
            .iter()
            .copied()
            .filter(|m| matched.contains(m))
            .collect()
    }
}
