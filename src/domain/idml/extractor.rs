//! Segment Extractor
//!
//! 解析每个 story 为 XML 树，先序深度优先遍历，收集非空的 Content 文本。

use roxmltree::{Node, NodeType};

use super::errors::IdmlError;
use super::package::{Package, PackageEntry};
use super::value_objects::{Segment, CONTENT_TAG};

/// 列出 IDML 包中的所有片段
pub fn list_segments(bytes: &[u8]) -> Result<Vec<Segment>, IdmlError> {
    let package = Package::from_bytes(bytes)?;
    extract(&package)
}

/// 从已读入的包中提取片段
///
/// story 按路径字节序排列；任何一个 story 的 XML 损坏都会让整个调用失败。
pub fn extract(package: &Package) -> Result<Vec<Segment>, IdmlError> {
    package.ensure_idml()?;

    let mut segments = Vec::new();
    for story in package.stories() {
        let texts = story_texts(story)?;
        segments.extend(texts.into_iter().enumerate().map(|(index, text)| Segment {
            story_path: story.name().to_string(),
            index,
            original_text: text,
        }));
    }

    tracing::debug!(count = segments.len(), "Segments extracted");
    Ok(segments)
}

/// 单个 story 中按文档顺序排列的非空 Content 文本
fn story_texts(story: &PackageEntry) -> Result<Vec<String>, IdmlError> {
    let xml = std::str::from_utf8(story.data()).map_err(|e| {
        IdmlError::invalid_input(format!("Story {} is not valid UTF-8: {}", story.name(), e))
    })?;
    let xml = xml.strip_prefix('\u{FEFF}').unwrap_or(xml);

    let document = roxmltree::Document::parse(xml).map_err(|e| {
        IdmlError::invalid_input(format!("Malformed XML in {}: {}", story.name(), e))
    })?;

    let mut texts = Vec::new();
    visit(document.root(), &mut texts);
    Ok(texts)
}

fn visit(node: Node<'_, '_>, texts: &mut Vec<String>) {
    if node.node_type() == NodeType::Element && node.tag_name().name() == CONTENT_TAG {
        let text = element_text(node);
        if !text.trim().is_empty() {
            texts.push(text);
        }
    }

    for child in node.children() {
        visit(child, texts);
    }
}

/// 元素直接子文本节点（含 CDATA）的拼接，不做裁剪
fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.node_type() == NodeType::Text)
        .filter_map(|child| child.text())
        .collect()
}
