//! IDML Package - 内存中的 zip 包
//!
//! 按原顺序保存所有条目（名称、解压后的字节、压缩方式）。
//! 读入后不可变，替换只会生成新的 Package。

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::errors::IdmlError;
use super::value_objects::{MANIFEST_ENTRY, STORIES_PREFIX};

/// 压缩包中的单个条目
#[derive(Debug, Clone)]
pub struct PackageEntry {
    name: String,
    data: Vec<u8>,
    compression: CompressionMethod,
    is_dir: bool,
}

impl PackageEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// 是否为 `Stories/*.xml`
    pub fn is_story(&self) -> bool {
        !self.is_dir && self.name.starts_with(STORIES_PREFIX) && self.name.ends_with(".xml")
    }
}

/// 内存中的压缩包（有序条目集合）
#[derive(Debug, Clone)]
pub struct Package {
    entries: Vec<PackageEntry>,
}

impl Package {
    /// 从字节读取压缩包，任何 zip 层面的失败都视为无效输入
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdmlError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| IdmlError::invalid_input(format!("Invalid ZIP/IDML payload: {}", e)))?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).map_err(|e| {
                IdmlError::invalid_input(format!("Invalid ZIP/IDML payload: {}", e))
            })?;

            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data).map_err(|e| {
                IdmlError::invalid_input(format!("Failed to read entry {}: {}", file.name(), e))
            })?;

            entries.push(PackageEntry {
                name: file.name().to_string(),
                data,
                compression: file.compression(),
                is_dir: file.is_dir(),
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&PackageEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// 是否为有效的 IDML 包：存在 designmap.xml（大小写不敏感）且至少有一个 story
    pub fn is_idml(&self) -> bool {
        let has_manifest = self
            .entries
            .iter()
            .any(|e| e.name.eq_ignore_ascii_case(MANIFEST_ENTRY));
        let has_stories = self.entries.iter().any(PackageEntry::is_story);
        has_manifest && has_stories
    }

    /// 校验为 IDML 包，否则返回 InvalidInput
    pub fn ensure_idml(&self) -> Result<(), IdmlError> {
        if self.is_idml() {
            Ok(())
        } else {
            Err(IdmlError::invalid_input(
                "Invalid IDML package (missing designmap.xml/Stories)",
            ))
        }
    }

    /// 所有 story 条目，按路径字节序升序
    pub fn stories(&self) -> Vec<&PackageEntry> {
        let mut stories: Vec<&PackageEntry> =
            self.entries.iter().filter(|e| e.is_story()).collect();
        stories.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        stories
    }

    /// 生成新包：`replaced` 中出现的条目换成新内容，其余条目原样保留
    pub fn with_replaced(&self, mut replaced: HashMap<String, Vec<u8>>) -> Package {
        let entries = self
            .entries
            .iter()
            .map(|entry| match replaced.remove(&entry.name) {
                Some(data) => PackageEntry {
                    data,
                    ..entry.clone()
                },
                None => entry.clone(),
            })
            .collect();

        Package { entries }
    }

    /// 序列化为 zip 字节，保持条目顺序和各自的压缩方式
    pub fn to_bytes(&self) -> Result<Vec<u8>, IdmlError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for entry in &self.entries {
            let options = SimpleFileOptions::default().compression_method(entry.compression);
            if entry.is_dir {
                writer
                    .add_directory(entry.name.clone(), options)
                    .map_err(|e| IdmlError::Archive(e.to_string()))?;
                continue;
            }
            writer
                .start_file(entry.name.clone(), options)
                .map_err(|e| IdmlError::Archive(e.to_string()))?;
            writer
                .write_all(&entry.data)
                .map_err(|e| IdmlError::Archive(e.to_string()))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| IdmlError::Archive(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

/// Archive Inspector：字节是否为有效 IDML 包，解析失败视为 false
pub fn is_package(bytes: &[u8]) -> bool {
    Package::from_bytes(bytes)
        .map(|package| package.is_idml())
        .unwrap_or(false)
}
