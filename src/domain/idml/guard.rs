//! Well-formedness Guard
//!
//! 替换器在提交每个 story 之前用它校验整个文档。

/// XML 良构性校验
pub trait XmlValidator: Send + Sync {
    fn is_well_formed(&self, xml: &str) -> bool;
}

/// 基于完整 XML 1.0 解析的校验器（非法字符、标签不匹配、未闭合元素都会被拒绝）
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictXmlValidator;

impl XmlValidator for StrictXmlValidator {
    fn is_well_formed(&self, xml: &str) -> bool {
        let xml = xml.strip_prefix('\u{FEFF}').unwrap_or(xml);
        if let Some(ch) = xml.chars().find(|c| !is_xml_char(*c)) {
            tracing::debug!(found = ?ch, "Story XML contains a character outside XML 1.0");
            return false;
        }
        match roxmltree::Document::parse(xml) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Story XML rejected by validator");
                false
            }
        }
    }
}

/// XML 1.0 `Char` 产生式
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

impl<F> XmlValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_well_formed(&self, xml: &str) -> bool {
        self(xml)
    }
}
