use std::{collections::HashMap, env::current_dir, path::PathBuf};

use crate::error::{Error, Result};


/// Returns the default configuration filepath, which is at
/// `{current directory}/config/config.yaml`.
///
/// The file is not required to exist; loading it reports a missing file.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    let working_directory = current_dir()
        .map_err(|error| Error::filesystem("determine the current directory", ".", error))?;

    Ok(working_directory.join("config").join("config.yaml"))
}

/// Replaces every occurrence of each placeholder key (e.g. `{ARTIFACTS_ROOT}`)
/// in `original_path` with its value.
#[must_use = "function returns the modified path"]
pub fn replace_placeholders_in_path<S>(
    original_path: S,
    placeholders: &HashMap<&'static str, String>,
) -> PathBuf
where
    S: Into<String>,
{
    let mut path_string: String = original_path.into();

    for (key, value) in placeholders {
        path_string = path_string.replace(key, value);
    }

    PathBuf::from(path_string)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_all_occurrences() {
        let placeholders = HashMap::from([("{ARTIFACTS_ROOT}", "artifacts".to_string())]);

        assert_eq!(
            replace_placeholders_in_path("{ARTIFACTS_ROOT}/data_ingestion", &placeholders),
            PathBuf::from("artifacts/data_ingestion")
        );
        assert_eq!(
            replace_placeholders_in_path("plain/dir", &placeholders),
            PathBuf::from("plain/dir")
        );
    }

    #[test]
    fn default_path_ends_with_config_yaml() {
        let path = get_default_configuration_file_path().unwrap();
        assert!(path.ends_with("config/config.yaml"));
    }
}
