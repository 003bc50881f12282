//! DTO справочника enum-ов для UI (выпадающие списки, подписи)

use serde::{Deserialize, Serialize};

use crate::enums::{Code, Enumeration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub symbol: String,
    pub code: Code,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumInfo {
    pub name: String,
    pub symbols: Vec<EnumMember>,
}

impl From<&Enumeration> for EnumInfo {
    fn from(e: &Enumeration) -> Self {
        Self {
            name: e.name().to_string(),
            symbols: e
                .symbols()
                .iter()
                .enumerate()
                .map(|(i, s)| EnumMember {
                    symbol: s.to_string(),
                    code: i as Code,
                })
                .collect(),
        }
    }
}
