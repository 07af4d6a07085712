//! Platform-specific directory paths and log rotation.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "folio";
const APPLICATION: &str = "portfolio";

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept by [`rotate_logs`].
pub const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the path to the page configuration file.
///
/// - Linux: `$XDG_CONFIG_HOME/portfolio/config.json`
/// - macOS: `~/Library/Application Support/dev.folio.portfolio/config.json`
/// - Windows: `C:\Users\<User>\AppData\Roaming\folio\portfolio\config\config.json`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Get the directory logs are written to (the platform cache dir).
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Name an archived log after the moment it was rotated.
pub fn archive_name(at: DateTime<Local>) -> String {
    format!("{}.log", at.format("%Y%m%d_%H%M%S"))
}

/// Archive `latest.log` in `dir` and prune old archives down to `keep`.
///
/// Returns the path the new `latest.log` should be written to.
pub fn rotate_logs(dir: &Path, keep: usize) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let latest = dir.join(LATEST_LOG);

    if latest.exists() {
        fs::rename(&latest, dir.join(archive_name(Local::now())))?;
    }

    let mut archived: Vec<(PathBuf, Option<std::time::SystemTime>)> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (entry.path(), modified)
        })
        .collect();

    // Oldest first; names sort chronologically too, which breaks mtime ties
    archived.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let excess = archived.len().saturating_sub(keep);
    for (path, _) in archived.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }

    Ok(latest)
}
