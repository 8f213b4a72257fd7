//! Shared fixtures for integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project with a `.git` root, a working subdirectory and an
/// isolated home/config directory.
///
/// ```text
/// <tmp>/project/.git/
/// <tmp>/project/work/          (working directory)
/// <tmp>/home/.config/          (XDG_CONFIG_HOME)
/// ```
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
    work_dir: PathBuf,
    home_dir: PathBuf,
    config_dir: PathBuf,
    clipboard_file: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        // Canonical so paths match what the binary prints on macOS (/private/var)
        let base = temp_dir.path().canonicalize().unwrap();
        let root = base.join("project");
        let work_dir = root.join("work");
        let home_dir = base.join("home");
        let config_dir = if cfg!(target_os = "macos") {
            home_dir.join("Library").join("Application Support")
        } else {
            home_dir.join(".config")
        };

        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(&work_dir).unwrap();
        fs::create_dir_all(&config_dir).unwrap();

        Self {
            _temp_dir: temp_dir,
            clipboard_file: base.join("clipboard.txt"),
            root,
            work_dir,
            home_dir,
            config_dir,
        }
    }

    pub fn directory_prompts(&self) -> PathBuf {
        self.work_dir.join("prompts")
    }

    pub fn project_prompts(&self) -> PathBuf {
        self.root.join("prompts")
    }

    pub fn project_local_prompts(&self) -> PathBuf {
        self.root.join(".git").join("info").join("prompts")
    }

    pub fn user_prompts(&self) -> PathBuf {
        self.config_dir.join("proompt").join("prompts")
    }

    /// Writes `<config dir>/proompt/config.toml`.
    pub fn write_user_config(&self, content: &str) {
        let dir = self.config_dir.join("proompt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to `<dir>/<file_name>`, creating `dir`.
    pub fn add_prompt(&self, dir: impl AsRef<Path>, file_name: &str, content: &str) -> PathBuf {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes an executable shell script and returns its path.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.parent().unwrap().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// What the clipboard command received, if it ran.
    pub fn clipboard(&self) -> Option<String> {
        fs::read_to_string(&self.clipboard_file).ok()
    }

    /// `proompt` in the working directory with an isolated environment.
    ///
    /// The editor defaults to `true` (save without changes), the picker
    /// takes the first line and the clipboard writes to a file.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("proompt").unwrap();
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env("XDG_CONFIG_HOME", self.home_dir.join(".config"))
            .env("EDITOR", "true")
            .env("PROOMPT_PICKER", "head -n 1")
            .env("PROOMPT_COPY_COMMAND", format!("cat > '{}'", self.clipboard_file.display()))
            .env("NO_COLOR", "1")
            .env_remove("PROOMPT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
