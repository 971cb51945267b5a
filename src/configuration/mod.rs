//! This module contains all configuration-relevant code: loading a YAML file
//! into a [`ConfigMapping`], and turning such a mapping into validated,
//! typed configuration structures.
//!
//! Your starting point should probably be [`read_config`].
//!
//! # Internals
//! Typed configuration follows the concept of unvalidated ("unresolved") and
//! validated ("resolved") structures. [`read_typed_config`] loads the file,
//! deserializes it into an unresolved structure and then calls its
//! [`resolve`][traits::ResolvableConfiguration::resolve] method, which is where
//! any additional validation lives. [`ArtifactsLayout`] is built this way.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};

mod mapping;
mod structure;
pub mod traits;
pub mod utilities;

pub use mapping::ConfigMapping;
pub use structure::*;

use self::mapping::value_kind;
use self::traits::ResolvableConfiguration;


/// Reads a YAML file and returns its top-level mapping.
///
/// # Errors
/// - [`Error::ConfigEmpty`] if the file holds no content (only blank lines,
///   comments or document markers) or a `null` document.
/// - [`Error::ConfigNotMapping`] if the top-level value is a scalar or a sequence.
/// - [`Error::ConfigMultipleDocuments`] if the file holds more than one document.
/// - [`Error::Parse`] if the YAML is malformed.
/// - [`Error::Filesystem`] if the file cannot be read as UTF-8 text.
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ConfigMapping> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|error| Error::filesystem("read configuration file", path, error))?;

    let mapping = match parse_single_document(path, &contents)? {
        Value::Null => {
            return Err(Error::ConfigEmpty {
                path: path.to_path_buf(),
            })
        }
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(Error::ConfigNotMapping {
                path: path.to_path_buf(),
                found: value_kind(&other),
            })
        }
    };

    let file_path = dunce::canonicalize(path).map_err(|error| {
        Error::filesystem("canonicalize configuration file path", path, error)
    })?;

    info!("YAML file loaded successfully: {}", path.display());

    Ok(ConfigMapping::loaded_from(mapping, file_path))
}

/// Reads a YAML file, deserializes it into the unresolved structure `U`
/// and resolves it.
pub fn read_typed_config<U, P>(path: P) -> Result<U::Resolved>
where
    U: DeserializeOwned + ResolvableConfiguration,
    P: AsRef<Path>,
{
    let unresolved = read_config(path)?.deserialize_into::<U>()?;
    unresolved.resolve()
}


/// Parses `contents` as a YAML stream that must contain at most one document.
/// A stream without any content parses to [`Value::Null`].
fn parse_single_document(path: &Path, contents: &str) -> Result<Value> {
    if !has_content(contents) {
        debug!("No YAML content in {}.", path.display());
        return Ok(Value::Null);
    }

    let mut documents = serde_yaml::Deserializer::from_str(contents);

    let Some(first_document) = documents.next() else {
        debug!("No YAML document in {}.", path.display());
        return Ok(Value::Null);
    };

    let value = Value::deserialize(first_document).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if documents.next().is_some() {
        return Err(Error::ConfigMultipleDocuments {
            path: path.to_path_buf(),
        });
    }

    Ok(value)
}

/// Whether `contents` holds anything besides blank lines, comments
/// and bare document markers (`---`, `...`).
fn has_content(contents: &str) -> bool {
    contents.lines().any(|line| {
        let line = line.trim();
        !(line.is_empty() || line.starts_with('#') || line == "---" || line == "...")
    })
}


#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use tempfile::TempDir;

    use super::*;

    fn write_config(directory: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = directory.path().join("config.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_nested_mapping() {
        let directory = TempDir::new().unwrap();
        let path = write_config(&directory, "a: 1\nb:\n  c: 2\n");

        let config = read_config(&path).unwrap();

        assert_eq!(config.field("a").unwrap(), &Value::from(1));
        assert_eq!(config.lookup("b.c"), Some(&Value::from(2)));
        assert_eq!(config.get_as::<i64>("b.c").unwrap(), 2);
        assert_eq!(
            config.file_path(),
            Some(dunce::canonicalize(&path).unwrap().as_path())
        );
    }

    #[test]
    fn empty_file_is_reported_with_its_path() {
        let directory = TempDir::new().unwrap();
        let path = write_config(&directory, "");

        let error = read_config(&path).unwrap_err();

        assert!(matches!(&error, Error::ConfigEmpty { path: reported } if reported == &path));
        assert_eq!(
            error.to_string(),
            format!("YAML file is empty: {}", path.display())
        );
    }

    #[test]
    fn comment_only_and_null_documents_are_empty() {
        let directory = TempDir::new().unwrap();

        for contents in [
            "# nothing here\n",
            "~\n",
            "null\n",
            "---\n",
            "...\n",
            "---\n# only a comment\n...\n",
        ] {
            let path = write_config(&directory, contents);
            assert!(
                matches!(read_config(&path), Err(Error::ConfigEmpty { .. })),
                "expected {contents:?} to be treated as empty"
            );
        }
    }

    #[test]
    fn scalar_and_sequence_documents_are_rejected() {
        let directory = TempDir::new().unwrap();

        let path = write_config(&directory, "just a string\n");
        assert!(matches!(
            read_config(&path),
            Err(Error::ConfigNotMapping { found: "string", .. })
        ));

        let path = write_config(&directory, "- a\n- b\n");
        assert!(matches!(
            read_config(&path),
            Err(Error::ConfigNotMapping { found: "sequence", .. })
        ));
    }

    #[test]
    fn empty_mapping_is_allowed() {
        let directory = TempDir::new().unwrap();
        let path = write_config(&directory, "{}\n");

        assert!(read_config(&path).unwrap().is_empty());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let directory = TempDir::new().unwrap();
        let path = write_config(&directory, "a: [1, 2\nb: : :\n");

        assert!(matches!(read_config(&path), Err(Error::Parse { .. })));
    }

    #[test]
    fn multiple_documents_are_rejected() {
        let directory = TempDir::new().unwrap();
        let path = write_config(&directory, "a: 1\n---\nb: 2\n");

        assert!(matches!(
            read_config(&path),
            Err(Error::ConfigMultipleDocuments { .. })
        ));
    }

    #[test]
    fn missing_file_keeps_io_error_kind() {
        let directory = TempDir::new().unwrap();
        let error = read_config(directory.path().join("absent.yaml")).unwrap_err();

        assert_eq!(error.io_kind(), Some(ErrorKind::NotFound));
    }

    #[test]
    fn typed_configuration_is_resolved() {
        #[derive(Deserialize)]
        struct UnresolvedTraining {
            epochs: u32,
        }

        struct Training {
            epochs: u32,
        }

        impl ResolvableConfiguration for UnresolvedTraining {
            type Resolved = Training;

            fn resolve(self) -> Result<Self::Resolved> {
                if self.epochs == 0 {
                    return Err(Error::InvalidConfiguration {
                        reason: "epochs must be positive".to_string(),
                    });
                }

                Ok(Training {
                    epochs: self.epochs,
                })
            }
        }

        let directory = TempDir::new().unwrap();

        let path = write_config(&directory, "epochs: 4\n");
        let training = read_typed_config::<UnresolvedTraining, _>(&path).unwrap();
        assert_eq!(training.epochs, 4);

        let path = write_config(&directory, "epochs: 0\n");
        assert!(matches!(
            read_typed_config::<UnresolvedTraining, _>(&path),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
