use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where the cleaned datasets live, relative to the working directory.
pub const DEFAULT_ROOT: &str = "data/raw";
/// Dataset this tool was built around.
pub const DEFAULT_DATASET: &str = "nyc-yellow-taxi-trip-records-january-2024";
/// Filename suffix that marks a file as output of the cleaning pipeline.
pub const DEFAULT_SUFFIX: &str = "_cleaned";

/// Loader configuration.
///
/// Defaults point at the January 2024 yellow-taxi dataset layout; passing the
/// config explicitly keeps the load operation free of hidden global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Root directory holding one subdirectory per dataset.
    pub root: PathBuf,
    /// Name of the dataset subdirectory under `root`.
    pub dataset_name: String,
    /// Suffix (before the `.csv` extension) identifying cleaned files.
    pub suffix: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            dataset_name: DEFAULT_DATASET.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Read a config override from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config `{}`", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config `{}`", path.display()))
    }

    /// Directory expected to contain the cleaned file.
    pub fn dataset_dir(&self) -> PathBuf {
        self.root.join(&self.dataset_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_point_at_january_dataset() {
        let cfg = LoaderConfig::default();
        assert_eq!(cfg.root, PathBuf::from("data/raw"));
        assert_eq!(cfg.dataset_name, "nyc-yellow-taxi-trip-records-january-2024");
        assert_eq!(cfg.suffix, "_cleaned");
        assert_eq!(
            cfg.dataset_dir(),
            PathBuf::from("data/raw/nyc-yellow-taxi-trip-records-january-2024")
        );
    }

    #[test]
    fn yaml_overrides_fill_in_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "root: /srv/datasets\ndataset_name: green-taxi-2024").unwrap();

        let cfg = LoaderConfig::from_yaml(tmp.path()).unwrap();
        assert_eq!(cfg.root, PathBuf::from("/srv/datasets"));
        assert_eq!(cfg.dataset_name, "green-taxi-2024");
        // unspecified field keeps its default
        assert_eq!(cfg.suffix, "_cleaned");
    }

    #[test]
    fn yaml_missing_file_is_an_error() {
        assert!(LoaderConfig::from_yaml("does-not-exist.yaml").is_err());
    }
}
