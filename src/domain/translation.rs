//! Translation - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 翻译模式
///
/// 只描述存根 provider 的两种机械变换；真实 provider 可以忽略它。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// 在原文后追加标记
    #[default]
    Lipsum,
    /// 按字符反转原文
    Reverse,
}

impl TranslationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lipsum => "lipsum",
            Self::Reverse => "reverse",
        }
    }
}

impl FromStr for TranslationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lipsum" => Ok(Self::Lipsum),
            "reverse" => Ok(Self::Reverse),
            other => Err(format!("Unknown translation mode: {}", other)),
        }
    }
}

impl std::fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
