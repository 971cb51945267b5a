use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

pub use self::stage_directory::StageDirectory;
use self::stage_directory::UnresolvedStageDirectory;
use super::mapping::ConfigMapping;
use super::traits::{ResolvableConfiguration, ResolvableConfigurationWithContext};
use super::{read_typed_config, utilities::get_default_configuration_file_path};
use crate::error::{Error, Result};
use crate::filesystem::ensure_directories;

mod stage_directory;


/// Placeholder that stage directories may use to refer to `artifacts_root`.
pub const ARTIFACTS_ROOT_PLACEHOLDER: &str = "{ARTIFACTS_ROOT}";


#[derive(Deserialize, Debug)]
pub struct UnresolvedArtifactsLayout {
    /// Root directory for every artifact the pipeline produces.
    artifacts_root: String,

    /// Every other top-level section. Sections carrying a `root_dir`
    /// key become stage directories.
    #[serde(flatten)]
    sections: Mapping,
}


/// Directory layout of the pipeline's artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactsLayout {
    pub artifacts_root: PathBuf,

    /// Stage directories, in the order their sections appear in the file.
    pub stage_directories: Vec<StageDirectory>,
}


impl ResolvableConfiguration for UnresolvedArtifactsLayout {
    type Resolved = ArtifactsLayout;

    fn resolve(self) -> Result<Self::Resolved> {
        if self.artifacts_root.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                reason: "artifacts_root must not be empty".to_string(),
            });
        }

        let placeholders = HashMap::from([(
            ARTIFACTS_ROOT_PLACEHOLDER,
            self.artifacts_root.clone(),
        )]);

        let mut stage_directories = Vec::new();

        for (key, value) in self.sections {
            let stage = match key {
                Value::String(stage) => stage,
                other => {
                    debug!("Skipping section with non-string key: {other:?}");
                    continue;
                }
            };

            let root_dir = value
                .as_mapping()
                .and_then(|section| section.get("root_dir"));

            let Some(root_dir) = root_dir else {
                debug!("Section {stage} has no root_dir, skipping.");
                continue;
            };

            let stage_directory = UnresolvedStageDirectory {
                stage,
                root_dir: root_dir.clone(),
            }
            .resolve(placeholders.clone())?;

            stage_directories.push(stage_directory);
        }

        Ok(ArtifactsLayout {
            artifacts_root: PathBuf::from(self.artifacts_root),
            stage_directories,
        })
    }
}


impl ArtifactsLayout {
    /// Resolve the layout from an already loaded configuration.
    pub fn from_config(configuration: &ConfigMapping) -> Result<Self> {
        configuration
            .deserialize_into::<UnresolvedArtifactsLayout>()?
            .resolve()
    }

    /// Load the layout from a specific configuration file path.
    pub fn load_from_path<P: AsRef<Path>>(configuration_file_path: P) -> Result<Self> {
        read_typed_config::<UnresolvedArtifactsLayout, _>(configuration_file_path)
    }

    /// Load the layout from the default path (`./config/config.yaml`).
    pub fn load_from_default_path() -> Result<Self> {
        Self::load_from_path(get_default_configuration_file_path()?)
    }

    /// The artifacts root followed by every stage directory.
    pub fn all_directories(&self) -> Vec<&Path> {
        std::iter::once(self.artifacts_root.as_path())
            .chain(
                self.stage_directories
                    .iter()
                    .map(|stage| stage.root_dir.as_path()),
            )
            .collect()
    }

    /// Creates every directory of the layout that does not exist yet.
    pub fn ensure_all(&self, verbose: bool) -> Result<()> {
        ensure_directories(self.all_directories(), verbose)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn layout_from(yaml: &str) -> Result<ArtifactsLayout> {
        let mapping: Mapping = serde_yaml::from_str(yaml).unwrap();
        ArtifactsLayout::from_config(&ConfigMapping::from(mapping))
    }

    #[test]
    fn collects_stage_directories_in_file_order() {
        let layout = layout_from(
            "artifacts_root: artifacts\n\
             data_ingestion:\n  root_dir: artifacts/data_ingestion\n  source_URL: https://example.com/data.zip\n\
             seed: 42\n\
             model_trainer:\n  root_dir: \"{ARTIFACTS_ROOT}/model_trainer\"\n\
             model_evaluation:\n  metric_file_name: metrics.csv\n",
        )
        .unwrap();

        assert_eq!(layout.artifacts_root, PathBuf::from("artifacts"));
        assert_eq!(
            layout.stage_directories,
            vec![
                StageDirectory {
                    stage: "data_ingestion".to_string(),
                    root_dir: PathBuf::from("artifacts/data_ingestion"),
                },
                StageDirectory {
                    stage: "model_trainer".to_string(),
                    root_dir: PathBuf::from("artifacts/model_trainer"),
                },
            ]
        );
        assert_eq!(
            layout.all_directories(),
            vec![
                Path::new("artifacts"),
                Path::new("artifacts/data_ingestion"),
                Path::new("artifacts/model_trainer"),
            ]
        );
    }

    #[test]
    fn rejects_empty_root() {
        assert!(matches!(
            layout_from("artifacts_root: \"  \"\n"),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn missing_root_fails_to_deserialize() {
        assert!(matches!(
            layout_from("data_ingestion:\n  root_dir: somewhere\n"),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_non_string_root_dir() {
        assert!(matches!(
            layout_from("artifacts_root: artifacts\nstage:\n  root_dir: [1, 2]\n"),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
