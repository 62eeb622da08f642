//! Container Enumerator
//!
//! 一次上传既可以是单个 IDML，也可以是打包了多个 IDML 的 zip。

use super::errors::IdmlError;
use super::package::Package;
use super::value_objects::{EmbeddedPackage, DEFAULT_PACKAGE_NAME};

/// 列出上传内容中的所有 IDML 包
///
/// - 本身就是 IDML：返回单元素列表，名字为 `supplied_name` 或 `document.idml`
/// - 普通 zip：收集所有 `.idml` 条目中能通过检查的包，名字为条目的文件名
/// - `require_at_least_one` 且结果为空：InvalidInput
/// - 外层无法作为 zip 打开：InvalidInput
pub fn enumerate_packages(
    bytes: &[u8],
    supplied_name: Option<&str>,
    require_at_least_one: bool,
) -> Result<Vec<EmbeddedPackage>, IdmlError> {
    let outer = Package::from_bytes(bytes)
        .map_err(|_| IdmlError::invalid_input("Invalid ZIP/IDML payload"))?;

    if outer.is_idml() {
        return Ok(vec![EmbeddedPackage {
            name: supplied_name.unwrap_or(DEFAULT_PACKAGE_NAME).to_string(),
            bytes: bytes.to_vec(),
        }]);
    }

    let mut packages = Vec::new();
    for entry in outer.entries() {
        if entry.is_dir() || !entry.name().to_lowercase().ends_with(".idml") {
            continue;
        }

        let valid = Package::from_bytes(entry.data())
            .map(|inner| inner.is_idml())
            .unwrap_or(false);
        if !valid {
            tracing::debug!(entry = %entry.name(), "Skipping embedded entry that is not an IDML package");
            continue;
        }

        let name = entry.name().rsplit('/').next().unwrap_or(entry.name());
        packages.push(EmbeddedPackage {
            name: name.to_string(),
            bytes: entry.data().to_vec(),
        });
    }

    if require_at_least_one && packages.is_empty() {
        return Err(IdmlError::invalid_input("No valid IDML files inside ZIP"));
    }

    tracing::debug!(count = packages.len(), "Embedded IDML packages enumerated");
    Ok(packages)
}
