use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Detect the command used to open URLs.
/// Checks BROWSER -> platform default ("open" on macOS, "xdg-open" elsewhere)
pub fn detect_opener() -> String {
    if let Ok(browser) = std::env::var("BROWSER") {
        // BROWSER may be a colon-separated list; the first entry wins
        if let Some(first) = browser.split(':').map(str::trim).find(|s| !s.is_empty()) {
            return first.to_string();
        }
    }

    if cfg!(target_os = "macos") {
        "open".to_string()
    } else {
        "xdg-open".to_string()
    }
}

/// Open `url` in a new browser window without blocking the TUI.
pub fn open_url(url: &str, opener_cmd: &str) -> Result<()> {
    let url = ensure_scheme(url);
    let cmd = format!("{opener_cmd} '{}'", url.replace('\'', "'\\''"));

    let child = spawn_detached(&cmd).with_context(|| format!("failed to launch {opener_cmd}"))?;
    reap(child);

    Ok(())
}

fn spawn_detached(cmd: &str) -> std::io::Result<Child> {
    Command::new("sh")
        .args(["-c", cmd])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

/// Wait for `child` off the UI thread so it does not linger as a zombie.
fn reap(mut child: Child) -> JoinHandle<Option<ExitStatus>> {
    thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!(%status, "opener exited");
            Some(status)
        }
        Err(err) => {
            warn!(%err, "failed to wait for opener");
            None
        }
    })
}

/// Configured donation links are sometimes bare hostnames; browsers need a
/// scheme, so assume https.
fn ensure_scheme(url: &str) -> String {
    let url = url.trim();
    let has_scheme = url
        .split_once("://")
        .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic()));

    if has_scheme || url.starts_with("mailto:") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(ensure_scheme("example.com"), "https://example.com");
    }

    #[test]
    fn bare_host_with_path_gets_https() {
        assert_eq!(
            ensure_scheme("stjude.org/donate?ref=dke"),
            "https://stjude.org/donate?ref=dke"
        );
    }

    #[test]
    fn explicit_scheme_unchanged() {
        let url = "http://collect.crowded.me/collection/x";
        assert_eq!(ensure_scheme(url), url);
    }

    #[test]
    fn mailto_unchanged() {
        assert_eq!(ensure_scheme("mailto:rush@example.com"), "mailto:rush@example.com");
    }

    #[test]
    fn launched_child_is_reaped() {
        let child = spawn_detached("exit 3").unwrap();
        let status = reap(child).join().unwrap().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(ensure_scheme("  example.com "), "https://example.com");
    }
}
