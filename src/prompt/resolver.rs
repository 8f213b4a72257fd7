//! Location resolution for the prompt hierarchy.
//!
//! [`resolve_locations`] is a pure function of the working directory, the
//! user configuration directory and a directory predicate. Missing
//! directories silently drop their location; only the user location is
//! always present, whether or not it exists yet.

use std::path::{Path, PathBuf};

use super::{LocationKind, PromptLocation};
use crate::constants::{APP_DIR, GIT_DIR, PROJECT_LOCAL_PROMPTS_DIR, PROMPTS_DIR};
use crate::core::{ProomptError, Result};
use crate::filesystem::Filesystem;

/// Produces the ordered list of prompt locations, highest precedence first.
pub trait LocationResolver {
    fn resolve(&self) -> Result<Vec<PromptLocation>>;
}

/// Finds the nearest ancestor of `start` (inclusive) holding a `.git` or
/// `prompts` directory.
///
/// Returns `None` once the walk reaches the filesystem root without a match.
pub fn find_project_root(start: &Path, is_dir: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        if is_dir(&dir.join(GIT_DIR)) || is_dir(&dir.join(PROMPTS_DIR)) {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }

    None
}

/// Computes prompt locations for `cwd` in precedence order.
///
/// `config_dir` is the platform configuration directory; the user location
/// is `<config_dir>/proompt/prompts`.
pub fn resolve_locations(
    cwd: &Path,
    config_dir: &Path,
    is_dir: impl Fn(&Path) -> bool,
) -> Vec<PromptLocation> {
    let mut locations = Vec::with_capacity(LocationKind::ALL.len());

    let directory = cwd.join(PROMPTS_DIR);
    if is_dir(&directory) {
        locations.push(PromptLocation::new(LocationKind::Directory, directory));
    }

    match find_project_root(cwd, &is_dir) {
        Some(root) => {
            tracing::debug!("Project root: {}", root.display());

            let project = root.join(PROMPTS_DIR);
            if is_dir(&project) {
                locations.push(PromptLocation::new(LocationKind::Project, project));
            }

            let project_local = root.join(PROJECT_LOCAL_PROMPTS_DIR);
            if is_dir(&project_local) {
                locations.push(PromptLocation::new(LocationKind::ProjectLocal, project_local));
            }
        }
        None => tracing::debug!("No project root above {}", cwd.display()),
    }

    locations.push(PromptLocation::new(
        LocationKind::User,
        config_dir.join(APP_DIR).join(PROMPTS_DIR),
    ));

    locations
}

/// [`LocationResolver`] probing a [`Filesystem`].
pub struct DefaultLocationResolver<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> DefaultLocationResolver<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self {
            fs,
        }
    }
}

impl LocationResolver for DefaultLocationResolver<'_> {
    fn resolve(&self) -> Result<Vec<PromptLocation>> {
        let cwd = self.fs.current_dir().map_err(|e| {
            ProomptError::file_system("determine working directory", PathBuf::from("."), e)
        })?;
        let config_dir = self.fs.config_dir().map_err(|e| {
            ProomptError::file_system("determine user config directory", PathBuf::from("~"), e)
        })?;

        let locations = resolve_locations(&cwd, &config_dir, |path| self.fs.is_dir(path));
        for location in &locations {
            tracing::trace!("Location {}: {}", location.kind, location.path.display());
        }
        Ok(locations)
    }
}
