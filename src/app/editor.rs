//! Open local configuration files in the user's editor.
//!
//! The editor takes over the terminal, so the caller must restore the
//! terminal before `open_blocking` and re-initialize it afterwards.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Used when neither `$VISUAL` nor `$EDITOR` is set
pub const FALLBACK_EDITOR: &str = "vi";

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur when opening a file in an editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The editor command is empty
    #[error("No editor configured or detected")]
    NoEditor,

    /// File not found at the specified path
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to execute the editor command
    #[error("Failed to execute editor: {0}")]
    ExecutionFailed(#[from] std::io::Error),

    /// The editor exited with a failure status
    #[error("Editor exited with status {0}")]
    NonZeroExit(i32),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main API
// ─────────────────────────────────────────────────────────────────────────────

/// Editor command line: `$VISUAL`, then `$EDITOR`, then `vi`
pub fn resolve_editor() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Open `path` in the resolved editor and wait for it to exit
pub fn open_blocking(path: &Path) -> Result<(), EditorError> {
    open_with(&resolve_editor(), path)
}

/// Run `command_line` with `path` appended as the last argument
pub fn open_with(command_line: &str, path: &Path) -> Result<(), EditorError> {
    if !path.is_file() {
        return Err(EditorError::FileNotFound(path.to_path_buf()));
    }

    // "code --wait" style values carry their own arguments
    let parts: Vec<&str> = command_line.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        return Err(EditorError::NoEditor);
    };

    tracing::info!("Opening {} with {}", path.display(), cmd);
    let status = Command::new(cmd).args(args).arg(path).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(EditorError::NonZeroExit(status.code().unwrap_or(-1)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn with_env<T>(visual: Option<&str>, editor: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = (std::env::var("VISUAL").ok(), std::env::var("EDITOR").ok());
        set_or_remove("VISUAL", visual);
        set_or_remove("EDITOR", editor);
        let out = f();
        set_or_remove("VISUAL", saved.0.as_deref());
        set_or_remove("EDITOR", saved.1.as_deref());
        out
    }

    fn set_or_remove(var: &str, value: Option<&str>) {
        match value {
            Some(v) => std::env::set_var(var, v),
            None => std::env::remove_var(var),
        }
    }

    #[test]
    #[serial]
    fn test_resolve_editor_prefers_visual() {
        let editor = with_env(Some("nvim"), Some("nano"), resolve_editor);
        assert_eq!(editor, "nvim");
    }

    #[test]
    #[serial]
    fn test_resolve_editor_falls_back_to_editor_var() {
        let editor = with_env(Some("  "), Some("nano"), resolve_editor);
        assert_eq!(editor, "nano");
    }

    #[test]
    #[serial]
    fn test_resolve_editor_defaults_to_vi() {
        let editor = with_env(None, None, resolve_editor);
        assert_eq!(editor, FALLBACK_EDITOR);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = open_with("true", &temp.path().join("config_missing"));
        assert!(matches!(result, Err(EditorError::FileNotFound(_))));
    }

    #[test]
    fn test_open_empty_command() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config_a");
        fs::write(&file, "{}").unwrap();
        assert!(matches!(open_with("   ", &file), Err(EditorError::NoEditor)));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_reports_exit_status() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config_a");
        fs::write(&file, "{}").unwrap();

        assert!(open_with("true", &file).is_ok());
        assert!(matches!(
            open_with("false", &file),
            Err(EditorError::NonZeroExit(1))
        ));
    }

    #[test]
    fn test_open_unknown_command() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config_a");
        fs::write(&file, "{}").unwrap();
        let result = open_with("definitely-not-an-editor-binary", &file);
        assert!(matches!(result, Err(EditorError::ExecutionFailed(_))));
    }
}
