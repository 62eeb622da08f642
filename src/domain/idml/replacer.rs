//! Segment Replacer
//!
//! 直接在 story 的原始文本上替换 `<Content>` 元素，未触及的字节（属性、
//! 周围标记、无关空白）保持原样。每个 story 的提交流程：
//!
//! ```text
//! Attempt(escaped-all) ──valid──▶ Commit
//!        │invalid
//!        ▼
//! PerSegmentProbe: escaped ──valid──▶ accept
//!                   │invalid
//!                   ▼
//!                  cdata ──valid──▶ accept
//!                   │invalid
//!                   ▼
//!               KeepOriginal
//! ```

use std::collections::HashMap;
use std::ops::Range;

use super::errors::IdmlError;
use super::guard::{StrictXmlValidator, XmlValidator};
use super::package::Package;
use super::value_objects::Replacement;
use super::xml_text::{
    content_spans, escape_text, processing_instructions, split_envelope, wrap_cdata, ContentSpan,
};

/// 译文的编码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Escaped,
    Cdata,
}

/// 逐段探测后单个片段的结果
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProbeOutcome {
    Accepted(Encoding, String),
    /// 译文无法被安全编码，保留原文
    UnsafeSegment,
}

/// 命中的 Content 元素
struct Target<'a> {
    index: usize,
    span: ContentSpan<'a>,
    translated: &'a str,
}

/// 用严格校验器替换片段
pub fn replace_segments(bytes: &[u8], replacements: &[Replacement]) -> Result<Vec<u8>, IdmlError> {
    replace_segments_with(bytes, replacements, &StrictXmlValidator)
}

/// 替换片段并返回新的包字节
///
/// 找不到的 `(storyPath, index)` 被静默忽略；没有命中任何片段的 story 字节不变。
pub fn replace_segments_with(
    bytes: &[u8],
    replacements: &[Replacement],
    validator: &dyn XmlValidator,
) -> Result<Vec<u8>, IdmlError> {
    let package = Package::from_bytes(bytes)?;
    package.ensure_idml()?;

    let by_story = group_by_story(replacements);
    let mut rewritten = HashMap::new();

    for story in package.stories() {
        let Some(targets) = by_story.get(story.name()) else {
            continue;
        };

        let Ok(original) = std::str::from_utf8(story.data()) else {
            tracing::warn!(story = %story.name(), "Story is not valid UTF-8, left unchanged");
            continue;
        };

        if let Some(updated) = rewrite_story(story.name(), original, targets, validator) {
            rewritten.insert(story.name().to_string(), updated.into_bytes());
        }
    }

    tracing::debug!(
        requested = replacements.len(),
        stories = rewritten.len(),
        "Segments replaced"
    );

    package.with_replaced(rewritten).to_bytes()
}

/// storyPath -> (index -> 译文)，同一位置后出现的替换覆盖先前的
fn group_by_story(replacements: &[Replacement]) -> HashMap<&str, HashMap<usize, &str>> {
    let mut grouped: HashMap<&str, HashMap<usize, &str>> = HashMap::new();
    for r in replacements {
        grouped
            .entry(r.story_path.as_str())
            .or_default()
            .insert(r.index, r.translated_text.as_str());
    }
    grouped
}

/// 重写单个 story；没有任何片段被替换时返回 None
fn rewrite_story(
    story_path: &str,
    original: &str,
    requested: &HashMap<usize, &str>,
    validator: &dyn XmlValidator,
) -> Option<String> {
    let targets = locate_targets(original, requested);
    if targets.is_empty() {
        return None;
    }

    // Attempt(escaped-all)
    let escaped: Vec<(Range<usize>, String)> = targets
        .iter()
        .map(|t| (t.span.range.clone(), build_element(original, t, Encoding::Escaped)))
        .collect();
    let attempt = splice(original, &escaped);
    if validator.is_well_formed(&attempt) {
        return Some(normalize_boundaries(&attempt));
    }

    tracing::warn!(
        story = %story_path,
        targets = targets.len(),
        "Escaped story is not well-formed, probing segments one by one"
    );

    // PerSegmentProbe
    let accepted: Vec<(Range<usize>, String)> = targets
        .iter()
        .filter_map(|t| match probe(original, t, validator) {
            ProbeOutcome::Accepted(encoding, element) => {
                tracing::debug!(story = %story_path, index = t.index, encoding = ?encoding, "Segment accepted");
                Some((t.span.range.clone(), element))
            }
            ProbeOutcome::UnsafeSegment => {
                tracing::warn!(story = %story_path, index = t.index, "Unsafe segment left unchanged");
                None
            }
        })
        .collect();

    if accepted.is_empty() {
        return None;
    }
    Some(normalize_boundaries(&splice(original, &accepted)))
}

/// 按与提取相同的计数规则找到被请求的 Content 元素
fn locate_targets<'a>(original: &'a str, requested: &HashMap<usize, &'a str>) -> Vec<Target<'a>> {
    content_spans(original)
        .into_iter()
        .filter(ContentSpan::has_text)
        .enumerate()
        .filter_map(|(index, span)| {
            requested.get(&index).map(|&translated| Target {
                index,
                span,
                translated,
            })
        })
        .collect()
}

/// 单独把一个片段代入原文并校验，先转义后 CDATA
fn probe(original: &str, target: &Target<'_>, validator: &dyn XmlValidator) -> ProbeOutcome {
    for encoding in [Encoding::Escaped, Encoding::Cdata] {
        let element = build_element(original, target, encoding);
        let candidate = splice(original, &[(target.span.range.clone(), element.clone())]);
        if validator.is_well_formed(&candidate) {
            return ProbeOutcome::Accepted(encoding, element);
        }
    }
    ProbeOutcome::UnsafeSegment
}

/// 用原属性和空白包络构造新的 Content 元素
///
/// 原正文中的处理指令（如页码标记 `<?ACE 18?>`）按原顺序接在译文之后。
fn build_element(original: &str, target: &Target<'_>, encoding: Encoding) -> String {
    let (leading, core, trailing) = split_envelope(target.span.inner);

    let mut body = match encoding {
        Encoding::Escaped => escape_text(target.translated),
        Encoding::Cdata => wrap_cdata(target.translated),
    };
    for instruction in processing_instructions(core) {
        body.push_str(instruction);
    }

    let following = original[target.span.range.end..].chars().next();
    if needs_spacer(target.translated, trailing, following) {
        body.push(' ');
    }

    format!(
        "<Content{}>{}{}{}</Content>",
        target.span.attrs, leading, body, trailing
    )
}

/// 译文紧贴其后的字符数据时补一个空格，防止单词粘连
///
/// 只有元素内没有尾随空白、结束标签后紧跟非空白的字符数据、且译文以
/// 字母数字或闭合标点结尾时才生效。
fn needs_spacer(translated: &str, trailing: &str, following: Option<char>) -> bool {
    if !trailing.is_empty() {
        return false;
    }
    let abuts_text = following.is_some_and(|c| !c.is_whitespace() && c != '<');
    let ends_tight = translated
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || is_closing_punctuation(c));
    abuts_text && ends_tight
}

fn is_closing_punctuation(c: char) -> bool {
    matches!(
        c,
        ')' | ']'
            | '}'
            | '"'
            | '\''
            | '\u{201D}'
            | '\u{2019}'
            | '\u{00BB}'
            | '\u{203A}'
            | '.'
            | ','
            | '!'
            | '?'
            | ';'
            | ':'
            | '\u{2026}'
    )
}

/// 按位置替换原文中的若干区间（区间按文档顺序且互不重叠）
fn splice(original: &str, parts: &[(Range<usize>, String)]) -> String {
    let mut out = String::with_capacity(original.len() + parts.len() * 16);
    let mut cursor = 0;
    for (range, replacement) in parts {
        out.push_str(&original[cursor..range.start]);
        out.push_str(replacement);
        cursor = range.end;
    }
    out.push_str(&original[cursor..]);
    out
}

/// Content 结束标签后紧跟非空白字符时插入一个空格
///
/// 结束标签的位置来自 `content_spans`，与片段计数使用同一个扫描器。
fn normalize_boundaries(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len());
    let mut cursor = 0;
    for span in content_spans(xml) {
        let end = span.range.end;
        out.push_str(&xml[cursor..end]);
        cursor = end;
        if xml[end..].chars().next().is_some_and(|c| !c.is_whitespace()) {
            out.push(' ');
        }
    }
    out.push_str(&xml[cursor..]);
    out
}
