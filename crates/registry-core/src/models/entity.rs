//! Entity keys, attribute kinds, and the per-entity aggregate of versions.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::FactRecord;
use crate::errors::{RegistryError, RegistryResult};

/// Business key of a registry entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "key", rename_all = "snake_case")]
pub enum EntityKey {
    /// 10-digit person number.
    Person(String),
    /// 8-digit company number.
    Company(String),
    /// Any other opaque key, e.g. a lookup node identification.
    Other(String),
}

impl EntityKey {
    pub fn person(number: &str) -> RegistryResult<Self> {
        validate_digits(number, 10, "person number")?;
        Ok(EntityKey::Person(number.to_string()))
    }

    pub fn company(number: &str) -> RegistryResult<Self> {
        validate_digits(number, 8, "company number")?;
        Ok(EntityKey::Company(number.to_string()))
    }

    pub fn other(key: impl Into<String>) -> Self {
        EntityKey::Other(key.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntityKey::Person(k) | EntityKey::Company(k) | EntityKey::Other(k) => k,
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Person(k) => write!(f, "person:{k}"),
            EntityKey::Company(k) => write!(f, "company:{k}"),
            EntityKey::Other(k) => write!(f, "other:{k}"),
        }
    }
}

fn validate_digits(value: &str, len: usize, what: &str) -> RegistryResult<()> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RegistryError::InvalidEntityKey(format!(
            "{what} must be exactly {len} digits (got {value:?})"
        )));
    }
    Ok(())
}

/// Which logical attribute a set of versions describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Name,
    Address,
    Status,
    CivilStatus,
    Citizenship,
    Custom(String),
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Name => f.write_str("name"),
            AttributeKind::Address => f.write_str("address"),
            AttributeKind::Status => f.write_str("status"),
            AttributeKind::CivilStatus => f.write_str("civil_status"),
            AttributeKind::Citizenship => f.write_str("citizenship"),
            AttributeKind::Custom(name) => f.write_str(name),
        }
    }
}

/// All known versions of every attribute of one entity.
///
/// Storage guarantees no ordering; resolution establishes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityAggregate<P> {
    pub key: EntityKey,
    pub attributes: HashMap<AttributeKind, Vec<FactRecord<P>>>,
}

impl<P> EntityAggregate<P> {
    pub fn new(key: EntityKey) -> Self {
        Self {
            key,
            attributes: HashMap::new(),
        }
    }

    /// Add a version under `kind`.
    pub fn push(&mut self, kind: AttributeKind, record: FactRecord<P>) {
        self.attributes.entry(kind).or_default().push(record);
    }

    /// All versions of `kind`, empty when the entity has none.
    pub fn versions(&self, kind: &AttributeKind) -> &[FactRecord<P>] {
        self.attributes.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }
}
