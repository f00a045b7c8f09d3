//! TOML-backed [`CodeDictionary`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryResult;
use crate::traits::{CodeDictionary, CodeTable};

/// Code tables held in memory.
///
/// ```toml
/// [country]
/// "5100" = "Danmark"
///
/// [status]
/// "01" = "Aktiv"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticDictionary {
    pub country: HashMap<String, String>,
    pub status: HashMap<String, String>,
}

impl StaticDictionary {
    pub fn from_toml(toml_str: &str) -> RegistryResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    fn table(&self, table: CodeTable) -> &HashMap<String, String> {
        match table {
            CodeTable::Country => &self.country,
            CodeTable::Status => &self.status,
        }
    }
}

impl CodeDictionary for StaticDictionary {
    fn label(&self, table: CodeTable, code: &str) -> Option<&str> {
        self.table(table).get(code).map(String::as_str)
    }
}
