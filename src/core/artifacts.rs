//! Local artifact discovery and output file naming
//!
//! Uploadable artifacts (firmware images, patch scripts, configuration
//! blobs) are plain files in fixed directories, selected by a name filter.
//! Downloads land next to them under timestamped names.

use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};

use crate::common::prelude::*;
use crate::config::{ArtifactSettings, PathSettings};

/// Which family of local files a picker lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Firmware,
    Patch,
    Config,
}

impl ArtifactKind {
    /// Directory the kind is listed from
    pub fn dir(self, paths: &PathSettings) -> PathBuf {
        match self {
            ArtifactKind::Firmware => paths.firmware(),
            ArtifactKind::Patch => paths.patches(),
            ArtifactKind::Config => paths.configs(),
        }
    }

    /// Name filter for the kind
    pub fn filter(self, artifacts: &ArtifactSettings) -> ArtifactFilter {
        match self {
            ArtifactKind::Firmware => {
                ArtifactFilter::Extension(artifacts.firmware_extension.clone())
            }
            ArtifactKind::Patch => ArtifactFilter::Extension(artifacts.patch_extension.clone()),
            ArtifactKind::Config => ArtifactFilter::Contains(artifacts.config_marker.clone()),
        }
    }

    /// Message shown when the directory holds nothing matching
    pub fn empty_message(self) -> &'static str {
        match self {
            ArtifactKind::Firmware => "No firmware files found in the source directory.",
            ArtifactKind::Patch => "No patch files found in the patch directory.",
            ArtifactKind::Config => "No configuration files found in the config directory.",
        }
    }
}

/// File name predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactFilter {
    /// Name ends with the given suffix (e.g. `.raucb`)
    Extension(String),
    /// Name contains the given substring
    Contains(String),
}

impl ArtifactFilter {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ArtifactFilter::Extension(ext) => file_name.ends_with(ext.as_str()),
            ArtifactFilter::Contains(marker) => file_name.contains(marker.as_str()),
        }
    }
}

/// List file names in `dir` accepted by `filter`, sorted by name
///
/// A missing or unreadable directory is an `Io` error; an empty result is
/// `NoArtifacts`.
pub fn list_artifacts(dir: &Path, filter: &ArtifactFilter) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            trace!("Skipping non-UTF-8 file name in {:?}", dir);
            continue;
        };
        if filter.matches(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Err(Error::NoArtifacts {
            dir: dir.to_path_buf(),
        });
    }

    names.sort();
    Ok(names)
}

/// Timestamped output file name, e.g. `Vslog_2025_01_08_14_05_09.rar`
pub fn timestamped_name<Tz: TimeZone>(prefix: &str, suffix: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}{}", prefix, now.format("%Y_%m_%d_%H_%M_%S"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_lists_only_matching_files_sorted() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "b.raucb");
        touch(temp.path(), "a.raucb");
        touch(temp.path(), "notes.txt");
        std::fs::create_dir(temp.path().join("dir.raucb")).unwrap();

        let files =
            list_artifacts(temp.path(), &ArtifactFilter::Extension(".raucb".into())).unwrap();

        assert_eq!(files, vec!["a.raucb".to_string(), "b.raucb".to_string()]);
    }

    #[test]
    fn test_contains_filter_for_config_files() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "config_2025_01_01_00_00_00");
        touch(temp.path(), "site-config.json");
        touch(temp.path(), "readme");

        let files =
            list_artifacts(temp.path(), &ArtifactFilter::Contains("config".into())).unwrap();

        assert_eq!(files.len(), 2);
        assert!(!files.contains(&"readme".to_string()));
    }

    #[test]
    fn test_empty_listing_is_no_artifacts() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "image.bin");

        let err =
            list_artifacts(temp.path(), &ArtifactFilter::Extension(".vsecc".into())).unwrap_err();

        assert!(matches!(err, Error::NoArtifacts { .. }));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp = tempdir().unwrap();
        let err = list_artifacts(
            &temp.path().join("missing"),
            &ArtifactFilter::Extension(".raucb".into()),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_kind_filters_follow_settings() {
        let artifacts = ArtifactSettings::default();
        assert!(ArtifactKind::Firmware.filter(&artifacts).matches("fw.raucb"));
        assert!(ArtifactKind::Patch.filter(&artifacts).matches("fix.vsecc"));
        assert!(!ArtifactKind::Patch.filter(&artifacts).matches("fw.raucb"));
        assert!(ArtifactKind::Config.filter(&artifacts).matches("my_config.json"));
    }

    #[test]
    fn test_timestamped_name() {
        let now = Utc.with_ymd_and_hms(2025, 1, 8, 14, 5, 9).unwrap();
        assert_eq!(
            timestamped_name("Vslog", ".rar", &now),
            "Vslog_2025_01_08_14_05_09.rar"
        );
        assert_eq!(
            timestamped_name("config", "", &now),
            "config_2025_01_08_14_05_09"
        );
    }
}
