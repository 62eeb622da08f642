//! XML 文本工具
//!
//! 直接在序列化后的 story 文本上工作：
//! - `content_spans`: 按文档顺序扫描 `<Content>` 元素，跳过注释、CDATA 段和处理指令
//! - `escape_text` / `wrap_cdata`: 两种译文编码
//! - `decode_inner`: 计算元素的文本值，与解析树的结果保持一致

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// 元素外的扫描：注释、CDATA、处理指令，或 `<Content ...>` 开始标签（属性值中允许出现 `>`）
static OUTER_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!--|<!\[CDATA\[|<\?|<Content((?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?)>"#)
        .expect("valid regex")
});

/// 元素内的扫描：注释、CDATA、处理指令，或 `</Content>` 结束标签
static INNER_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--|<!\[CDATA\[|<\?|</Content\s*>").expect("valid regex"));

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const PI_OPEN: &str = "<?";
const PI_CLOSE: &str = "?>";

/// 一个 `<Content>` 元素在原文中的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSpan<'a> {
    /// 整个元素（开始标签到结束标签）
    pub range: Range<usize>,
    /// 开始标签中的属性串（含前导空白）
    pub attrs: &'a str,
    /// 原始内部内容
    pub inner: &'a str,
}

impl ContentSpan<'_> {
    /// 元素解码后的文本值去掉首尾空白后是否非空
    pub fn has_text(&self) -> bool {
        !decode_inner(self.inner).trim().is_empty()
    }
}

/// 按文档顺序列出所有非自闭合的 `<Content>` 元素
///
/// 注释、CDATA 段和处理指令中的标签不计入，与解析树看到的元素一致。
pub fn content_spans(xml: &str) -> Vec<ContentSpan<'_>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(open) = OUTER_MARKUP.captures_at(xml, pos) {
        let Some(tag) = open.get(0) else {
            break;
        };

        let Some(attrs) = open.get(1).map(|m| m.as_str()) else {
            match skip_opaque(xml, tag.start(), tag.as_str()) {
                Some(end) => {
                    pos = end;
                    continue;
                }
                None => break,
            }
        };

        // <Content/> 没有文本，不参与计数
        if attrs.trim_end().ends_with('/') {
            pos = tag.end();
            continue;
        }

        let Some(close) = find_close(xml, tag.end()) else {
            break;
        };

        spans.push(ContentSpan {
            range: tag.start()..close.end,
            attrs,
            inner: &xml[tag.end()..close.start],
        });
        pos = close.end;
    }

    spans
}

/// 从 `from` 开始找到 Content 元素的结束标签，跳过其中的注释、CDATA 和处理指令
fn find_close(xml: &str, from: usize) -> Option<Range<usize>> {
    let mut pos = from;
    loop {
        let found = INNER_MARKUP.find_at(xml, pos)?;
        if found.as_str().starts_with("</") {
            return Some(found.range());
        }
        pos = skip_opaque(xml, found.start(), found.as_str())?;
    }
}

/// 跳过以 `opener` 开头的注释、CDATA 段或处理指令，返回其后的位置；未闭合时返回 None
fn skip_opaque(xml: &str, start: usize, opener: &str) -> Option<usize> {
    let terminator = match opener {
        COMMENT_OPEN => COMMENT_CLOSE,
        CDATA_OPEN => CDATA_CLOSE,
        _ => PI_CLOSE,
    };
    let body = start + opener.len();
    xml[body..]
        .find(terminator)
        .map(|idx| body + idx + terminator.len())
}

/// 按出现顺序列出内部内容中的处理指令（如 `<?ACE 18?>`）
pub fn processing_instructions(inner: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(idx) = inner[pos..].find('<') {
        let start = pos + idx;
        let rest = &inner[start..];
        let opener = [COMMENT_OPEN, CDATA_OPEN, PI_OPEN]
            .into_iter()
            .find(|opener| rest.starts_with(opener));
        let Some(opener) = opener else {
            pos = start + 1;
            continue;
        };
        let Some(end) = skip_opaque(inner, start, opener) else {
            break;
        };
        if opener == PI_OPEN {
            found.push(&inner[start..end]);
        }
        pos = end;
    }
    found
}

/// 把内部内容拆成 `前导空白 | 正文 | 尾随空白`
pub fn split_envelope(inner: &str) -> (&str, &str, &str) {
    let body = inner.trim_start();
    let leading = &inner[..inner.len() - body.len()];
    let core = body.trim_end();
    let trailing = &body[core.len()..];
    (leading, core, trailing)
}

/// 最小的文本内容转义：`&`、`<`、`>`，以及会被行尾规范化吞掉的 `\r`
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 用 CDATA 包裹文本，文本中的 `]]>` 被拆到两个相邻的 CDATA 段中
pub fn wrap_cdata(text: &str) -> String {
    format!(
        "{}{}{}",
        CDATA_OPEN,
        text.replace(CDATA_CLOSE, "]]]]><![CDATA[>"),
        CDATA_CLOSE
    )
}

/// 计算元素内部内容的文本值
///
/// 展开实体和 CDATA，丢弃注释、处理指令和嵌套标签。
pub fn decode_inner(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(CDATA_OPEN) {
            let end = after.find(CDATA_CLOSE).unwrap_or(after.len());
            out.push_str(&after[..end]);
            rest = after.get(end + CDATA_CLOSE.len()..).unwrap_or("");
        } else if let Some(after) = rest.strip_prefix(COMMENT_OPEN) {
            rest = skip_past(after, COMMENT_CLOSE);
        } else if let Some(after) = rest.strip_prefix(PI_OPEN) {
            rest = skip_past(after, PI_CLOSE);
        } else if ch == '<' {
            rest = skip_past(&rest[1..], ">");
        } else if ch == '&' {
            match decode_entity(rest) {
                Some((decoded, len)) => {
                    out.push(decoded);
                    rest = &rest[len..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

fn skip_past<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(idx) => &text[idx + marker.len()..],
        None => "",
    }
}

/// 解析 `&...;`，返回字符和消耗的字节数
fn decode_entity(text: &str) -> Option<(char, usize)> {
    let end = text.find(';')?;
    let name = &text[1..end];
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    };
    Some((ch, end + 1))
}
