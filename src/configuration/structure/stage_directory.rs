use std::collections::HashMap;
use std::path::PathBuf;

use serde_yaml::Value;

use crate::configuration::{
    traits::ResolvableConfigurationWithContext,
    utilities::replace_placeholders_in_path,
};
use crate::error::{Error, Result};


pub(super) struct UnresolvedStageDirectory {
    pub(super) stage: String,

    pub(super) root_dir: Value,
}

/// Working directory of a single pipeline stage (e.g. `data_ingestion`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDirectory {
    /// Name of the configuration section this directory was read from.
    pub stage: String,

    pub root_dir: PathBuf,
}

impl ResolvableConfigurationWithContext for UnresolvedStageDirectory {
    type Resolved = StageDirectory;
    type Context = HashMap<&'static str, String>;

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved> {
        let Value::String(root_dir) = self.root_dir else {
            return Err(Error::InvalidConfiguration {
                reason: format!("{}.root_dir must be a string", self.stage),
            });
        };

        if root_dir.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                reason: format!("{}.root_dir must not be empty", self.stage),
            });
        }

        Ok(StageDirectory {
            stage: self.stage,
            root_dir: replace_placeholders_in_path(root_dir, &context),
        })
    }
}
