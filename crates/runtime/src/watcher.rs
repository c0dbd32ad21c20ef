use anyhow::Result;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use tracing::info;

/// True for a create or modify event touching a file called `file_name`.
fn is_config_change(event: &Event, file_name: &OsStr) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event.paths.iter().any(|p| p.file_name() == Some(file_name))
}

/// Watch `path` and send it on `changes` whenever it is written.
///
/// The parent directory is watched rather than the file itself, since many
/// editors save by replacing the file.
///
/// # Errors
///
/// Fails if `path` has no file name or the platform watcher cannot start.
pub fn watch_config(path: &Path, changes: Sender<PathBuf>) -> Result<RecommendedWatcher> {
    let file_name = path
        .file_name()
        .map(OsString::from)
        .ok_or_else(|| anyhow::anyhow!("config path {} has no file name", path.display()))?;
    let target = path.to_path_buf();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if is_config_change(&event, &file_name) && changes.send(target.clone()).is_err() {
                tracing::debug!("config change receiver dropped");
            }
        }
        Err(e) => tracing::error!("Error watching config file: {e:?}"),
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    info!("Watching {} for config changes.", path.display());
    Ok(watcher)
}
