//! IDML Engine - Value Objects

use serde::{Deserialize, Serialize};

/// 根 manifest 条目名（大小写不敏感匹配）
pub const MANIFEST_ENTRY: &str = "designmap.xml";

/// Story 条目所在目录前缀
pub const STORIES_PREFIX: &str = "Stories/";

/// 承载可翻译文本的元素名
pub const CONTENT_TAG: &str = "Content";

/// 直接上传单个 IDML 且未提供名字时使用的文件名
pub const DEFAULT_PACKAGE_NAME: &str = "document.idml";

/// 提取出的文本片段
///
/// `index` 在每个 story 内从 0 开始，只统计去掉首尾空白后非空的 Content 节点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub story_path: String,
    pub index: usize,
    pub original_text: String,
}

/// 调用方提供的译文替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replacement {
    pub story_path: String,
    pub index: usize,
    pub translated_text: String,
}

impl Replacement {
    pub fn new(story_path: impl Into<String>, index: usize, translated_text: impl Into<String>) -> Self {
        Self {
            story_path: story_path.into(),
            index,
            translated_text: translated_text.into(),
        }
    }
}

/// 容器中枚举出的单个 IDML 包
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPackage {
    pub name: String,
    pub bytes: Vec<u8>,
}
