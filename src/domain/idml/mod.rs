//! IDML Engine - 片段提取与替换
//!
//! 职责:
//! - Archive Inspector: 判断字节是否为 IDML 包
//! - Container Enumerator: 从上传内容中列出 IDML 包
//! - Segment Extractor: 按稳定的文档顺序列出可翻译文本
//! - Segment Replacer: 把译文写回 story，保持 zip 和 XML 有效
//! - Well-formedness Guard: 校验候选 story 并选择编码方式
//!
//! 所有操作都是纯同步函数，不做 I/O，可以在任意线程并发调用。

mod container;
mod errors;
mod extractor;
mod guard;
mod package;
mod replacer;
mod value_objects;
mod xml_text;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests;

pub use container::enumerate_packages;
pub use errors::IdmlError;
pub use extractor::{extract, list_segments};
pub use guard::{StrictXmlValidator, XmlValidator};
pub use package::{is_package, Package, PackageEntry};
pub use replacer::{replace_segments, replace_segments_with};
pub use value_objects::{
    EmbeddedPackage, Replacement, Segment, CONTENT_TAG, DEFAULT_PACKAGE_NAME, MANIFEST_ENTRY,
    STORIES_PREFIX,
};
