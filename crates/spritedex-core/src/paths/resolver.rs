//! Data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "SPRITEDEX_DATA_DIR";

/// Name of the sprites directory under the data root.
pub const SPRITES_DIR_NAME: &str = "sprites";

/// Application directory name under the platform data directory.
const APP_DIR_NAME: &str = "spritedex";

/// How the data root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRootSource {
    /// The caller passed an explicit path (e.g. a CLI flag).
    Explicit,
    /// The path came from `SPRITEDEX_DATA_DIR`.
    EnvVar,
    /// Platform default.
    Default,
}

/// Resolution result for the data root.
#[derive(Debug, Clone)]
pub struct DataRootResolution {
    /// The resolved data root.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DataRootSource,
}

impl DataRootResolution {
    /// The sprites directory under this data root.
    pub fn sprites_dir(&self) -> PathBuf {
        sprites_dir(&self.path)
    }
}

/// Resolve the data root from an explicit override, env var, or default.
pub fn resolve_data_root(explicit: Option<&str>) -> Result<DataRootResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(DataRootResolution {
            path: normalize_user_path(path_str)?,
            source: DataRootSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(DATA_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(DataRootResolution {
                path: normalize_user_path(&env_path)?,
                source: DataRootSource::EnvVar,
            });
        }
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(DataRootResolution {
        path: data_dir.join(APP_DIR_NAME),
        source: DataRootSource::Default,
    })
}

/// Resolve the data root and make sure it exists as a directory.
pub fn data_root(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    let root = resolve_data_root(explicit)?.path;

    if root.exists() {
        if !root.is_dir() {
            return Err(PathError::NotADirectory(root));
        }
    } else {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// The `<base>/sprites` directory.
pub fn sprites_dir(base: &Path) -> PathBuf {
    base.join(SPRITES_DIR_NAME)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::DataDirOverride;
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let _env = DataDirOverride::set("/tmp/from-env");

        let resolved = resolve_data_root(Some("/tmp/explicit")).unwrap();
        assert_eq!(resolved.source, DataRootSource::Explicit);
        assert_eq!(resolved.path, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn test_env_var_used_without_explicit() {
        let _env = DataDirOverride::set("/tmp/from-env");

        let resolved = resolve_data_root(None).unwrap();
        assert_eq!(resolved.source, DataRootSource::EnvVar);
        assert_eq!(resolved.sprites_dir(), PathBuf::from("/tmp/from-env/sprites"));
    }

    #[test]
    fn test_blank_env_var_falls_back_to_default() {
        let _env = DataDirOverride::set("   ");

        let resolved = resolve_data_root(None).unwrap();
        assert_eq!(resolved.source, DataRootSource::Default);
        assert!(resolved.path.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_empty_explicit_path_is_rejected() {
        assert!(matches!(
            resolve_data_root(Some("  ")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn test_relative_path_is_made_absolute() {
        let resolved = resolve_data_root(Some("relative/data")).unwrap();
        assert!(resolved.path.is_absolute());
        assert!(resolved.path.ends_with("relative/data"));
    }

    #[test]
    fn test_data_root_rejects_file() {
        let file = std::env::temp_dir().join(format!("spritedex-not-a-dir-{}", std::process::id()));
        fs::write(&file, b"x").unwrap();

        let result = data_root(Some(file.to_str().unwrap()));
        assert!(matches!(result, Err(PathError::NotADirectory(_))));

        fs::remove_file(&file).unwrap();
    }
}
