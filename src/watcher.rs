use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Duration;

use anyhow::{Context, Result};
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use tracing::warn;

use crate::event::AppEvent;

/// Start watching the content file in its own thread.
///
/// Editors often replace files instead of writing in place, so the parent
/// directory is watched and events are filtered down to the file itself.
/// Dropping the returned handle stops watching.
pub fn spawn(
    content: &Path,
    debounce_ms: u64,
    tx: Sender<AppEvent>,
) -> Result<notify_debouncer_mini::Debouncer<notify::RecommendedWatcher>> {
    let target = content
        .canonicalize()
        .with_context(|| format!("cannot watch {}", content.display()))?;
    let dir = target
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let watched = target.clone();

    let mut debouncer = new_debouncer(
        Duration::from_millis(debounce_ms),
        move |res: Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>| {
            let events = match res {
                Ok(evts) => evts,
                Err(err) => {
                    warn!(%err, "content watcher error");
                    return;
                }
            };

            if events
                .iter()
                .any(|e| e.kind == DebouncedEventKind::Any && is_content_file(&e.path, &watched))
            {
                // one reload per debounce batch is enough
                let _ = tx.send(AppEvent::ContentChanged);
            }
        },
    )?;

    debouncer
        .watcher()
        .watch(&dir, notify::RecursiveMode::NonRecursive)?;

    Ok(debouncer)
}

/// Decide whether a filesystem event path refers to the content file.
fn is_content_file(path: &Path, target: &Path) -> bool {
    if path == target {
        return true;
    }
    // Events may carry a non-canonical path (symlinked dirs, relative roots)
    path.file_name() == target.file_name()
        && path
            .parent()
            .and_then(|p| p.canonicalize().ok())
            .is_some_and(|p| Some(p.as_path()) == target.parent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn exact_path_matches() {
        let target = Path::new("/srv/site/content.json");
        assert!(is_content_file(target, target));
    }

    #[test]
    fn sibling_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let target = root.join("content.json");
        fs::write(&target, "{}").unwrap();
        assert!(!is_content_file(&root.join("content.json.swp"), &target));
        assert!(!is_content_file(&root.join("other.json"), &target));
    }

    #[test]
    fn non_canonical_parent_matches() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        let target = root.join("content.json");
        let roundabout = root.join("sub").join("..").join("content.json");
        assert!(is_content_file(&roundabout, &target));
    }
}
