use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("YAML file is empty: {}", path.display())]
    #[diagnostic(code(text_summarizer_utils::config_empty))]
    ConfigEmpty { path: PathBuf },

    /// The document parsed to a bare scalar or a sequence.
    ///
    /// Reported separately from [`Error::ConfigEmpty`], naming the kind
    /// of value found.
    #[error("YAML file does not contain a mapping at the top level (found {found}): {}", path.display())]
    #[diagnostic(
        code(text_summarizer_utils::config_not_mapping),
        help("The configuration file must start with `key: value` pairs.")
    )]
    ConfigNotMapping { path: PathBuf, found: &'static str },

    #[error("YAML file contains more than one document: {}", path.display())]
    #[diagnostic(code(text_summarizer_utils::config_multiple_documents))]
    ConfigMultipleDocuments { path: PathBuf },

    #[error("Failed to parse YAML file: {}", path.display())]
    #[diagnostic(code(text_summarizer_utils::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to {action}: {}", path.display())]
    #[diagnostic(code(text_summarizer_utils::filesystem))]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration has no key named `{key}`")]
    #[diagnostic(code(text_summarizer_utils::missing_key))]
    MissingKey { key: String },

    #[error("Configuration value `{key}` is not a mapping")]
    #[diagnostic(code(text_summarizer_utils::not_a_section))]
    NotASection { key: String },

    #[error("Configuration value `{key}` has an unexpected type")]
    #[diagnostic(code(text_summarizer_utils::invalid_value))]
    InvalidValue {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {reason}")]
    #[diagnostic(code(text_summarizer_utils::invalid_configuration))]
    InvalidConfiguration { reason: String },
}

impl Error {
    pub(crate) fn filesystem<P: Into<PathBuf>>(
        action: &'static str,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the underlying I/O error kind for filesystem failures.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Filesystem { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
