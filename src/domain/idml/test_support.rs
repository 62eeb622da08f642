//! 测试用 IDML 构造器

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::xml_text::escape_text;

/// 构造 story XML；`None` 生成空的 `<Content></Content>`
pub fn story_xml(contents: &[Option<&str>]) -> String {
    let body: String = contents
        .iter()
        .map(|c| match c {
            Some(text) => format!("<Content>{}</Content>", escape_text(text)),
            None => "<Content></Content>".to_string(),
        })
        .collect();
    format!("\n      <Story>\n        {}\n      </Story>\n    ", body)
}

/// 按给定顺序写出 zip
pub fn build_zip(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, data) in entries {
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// 构造最小 IDML：mimetype、designmap.xml、样式资源和若干 story
pub fn build_idml(stories: &[(&str, &[Option<&str>])]) -> Vec<u8> {
    let mut entries: Vec<(String, Vec<u8>)> = vec![
        (
            "mimetype".to_string(),
            b"application/vnd.adobe.indesign-idml-package".to_vec(),
        ),
        ("designmap.xml".to_string(), b"<Document/>".to_vec()),
        (
            "Resources/Styles.xml".to_string(),
            b"<idPkg:Styles xmlns:idPkg=\"http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging\"/>".to_vec(),
        ),
    ];
    for (name, contents) in stories {
        entries.push((
            format!("Stories/{}.xml", name),
            story_xml(contents).into_bytes(),
        ));
    }

    let borrowed: Vec<(&str, Vec<u8>)> = entries
        .iter()
        .map(|(name, data)| (name.as_str(), data.clone()))
        .collect();
    build_zip(&borrowed)
}

/// 用原始 story XML 构造 IDML
pub fn build_idml_raw(stories: &[(&str, &str)]) -> Vec<u8> {
    let mut entries: Vec<(&str, Vec<u8>)> = vec![("designmap.xml", b"<Document/>".to_vec())];
    for &(path, xml) in stories {
        entries.push((path, xml.as_bytes().to_vec()));
    }
    build_zip(&entries)
}
