//! Read-only code → label tables, injected rather than global.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeTable {
    Country,
    Status,
}

pub trait CodeDictionary: Send + Sync {
    fn label(&self, table: CodeTable, code: &str) -> Option<&str>;
}
