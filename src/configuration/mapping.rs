use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};


/// A parsed YAML configuration document.
///
/// Top-level keys are reachable both through plain key lookup ([`Self::get`])
/// and through field-style access ([`Self::field`], [`Self::section`]), which
/// returns an error instead of `None` when the key is absent.
/// Nested values can be reached with a dotted path (`"b.c"`) through
/// [`Self::lookup`] or deserialized directly with [`Self::get_as`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigMapping {
    /// Canonical path of the file this mapping was loaded from,
    /// `None` for mappings constructed in memory.
    file_path: Option<PathBuf>,

    mapping: Mapping,
}

impl ConfigMapping {
    pub(crate) fn loaded_from(mapping: Mapping, file_path: PathBuf) -> Self {
        Self {
            file_path: Some(file_path),
            mapping,
        }
    }

    /// Path of the file this configuration was loaded from.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Key-based lookup of a top-level value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.mapping.get(key)
    }

    /// Field-style access to a top-level value.
    pub fn field(&self, name: &str) -> Result<&Value> {
        self.get(name).ok_or_else(|| Error::MissingKey {
            key: name.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Returns the nested mapping stored under `name`.
    ///
    /// The returned section inherits this mapping's file path.
    pub fn section(&self, name: &str) -> Result<ConfigMapping> {
        match self.field(name)? {
            Value::Mapping(nested) => Ok(Self {
                file_path: self.file_path.clone(),
                mapping: nested.clone(),
            }),
            _ => Err(Error::NotASection {
                key: name.to_string(),
            }),
        }
    }

    /// Follows a dotted path (e.g. `"data_ingestion.root_dir"`) through nested mappings.
    pub fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut segments = dotted_path.split('.');
        let mut current = self.get(segments.next()?)?;

        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }

        Some(current)
    }

    /// Looks up `dotted_path` and deserializes the value found there.
    pub fn get_as<T: DeserializeOwned>(&self, dotted_path: &str) -> Result<T> {
        let value = self.lookup(dotted_path).ok_or_else(|| Error::MissingKey {
            key: dotted_path.to_string(),
        })?;

        serde_yaml::from_value(value.clone()).map_err(|source| Error::InvalidValue {
            key: dotted_path.to_string(),
            source,
        })
    }

    /// Deserializes the entire mapping into a typed structure.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(Value::Mapping(self.mapping.clone())).map_err(|source| {
            Error::InvalidValue {
                key: "<root>".to_string(),
                source,
            }
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.mapping.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.mapping.iter()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.mapping
    }
}

impl From<Mapping> for ConfigMapping {
    fn from(mapping: Mapping) -> Self {
        Self {
            file_path: None,
            mapping,
        }
    }
}


/// Human-readable name of a YAML value's kind, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
