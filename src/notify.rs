// File: src/notify.rs
/*! Best-effort notification delivery.

Delivery runs through an ordered chain of backends, each tried in turn
until one succeeds. A backend failing (including simply not existing on
the current platform) is never an error for the caller; the next
backend is tried, and the plain-text echo at the end of the chain means
the user almost always sees *something*. The caller only learns whether
any backend succeeded, not which one.
*/

use anyhow::Result;
use notify_rust::Notification;
use std::io::Write;
use std::process::Command;

/// Application name attached to desktop notifications.
pub const APP_NAME: &str = "Quotidie";

/// Default display-duration hint, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 6;

/// One delivery mechanism in the fallback chain.
pub trait NotifyBackend {
    fn name(&self) -> &'static str;

    /// Attempt delivery. Any `Err` means "try the next backend".
    fn send(&self, title: &str, body: &str, timeout_secs: u32) -> Result<()>;
}

// --- Backend 1: native desktop toast ---

/// Toast through the host's desktop notification service
/// (XDG/D-Bus, WinRT or the macOS notification center).
pub struct DesktopToast;

impl NotifyBackend for DesktopToast {
    fn name(&self) -> &'static str {
        "desktop-toast"
    }

    fn send(&self, title: &str, body: &str, timeout_secs: u32) -> Result<()> {
        Notification::new()
            .summary(title)
            .body(body)
            .appname(APP_NAME)
            .timeout(notify_rust::Timeout::Milliseconds(
                timeout_secs.saturating_mul(1000),
            ))
            .show()?;
        Ok(())
    }
}

// --- Backend 2: external notifier command ---

/// Shells out to whatever notifier binary the platform ships.
/// Covers desktops where the notification service is unreachable from
/// this process (broken session bus, missing WinRT registration) but a
/// command-line notifier still works.
pub struct CommandNotifier;

impl NotifyBackend for CommandNotifier {
    fn name(&self) -> &'static str {
        "notifier-command"
    }

    fn send(&self, title: &str, body: &str, timeout_secs: u32) -> Result<()> {
        let mut cmd = platform_command(title, body, timeout_secs)
            .ok_or_else(|| anyhow::anyhow!("no notifier command for this platform"))?;
        let output = cmd.output()?;
        if !output.status.success() {
            anyhow::bail!("notifier command exited with {}", output.status);
        }
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn platform_command(title: &str, body: &str, timeout_secs: u32) -> Option<Command> {
    let mut cmd = Command::new("notify-send");
    cmd.args([
        "--app-name",
        APP_NAME,
        "--expire-time",
        &timeout_secs.saturating_mul(1000).to_string(),
        title,
        body,
    ]);
    Some(cmd)
}

#[cfg(target_os = "macos")]
fn platform_command(title: &str, body: &str, _timeout_secs: u32) -> Option<Command> {
    // AppleScript string literals escape backslash and double quote only.
    let esc = |s: &str| s.replace('\\', "\\\\").replace('"', "\\\"");
    let mut cmd = Command::new("osascript");
    cmd.args([
        "-e",
        &format!(
            "display notification \"{}\" with title \"{}\"",
            esc(body),
            esc(title)
        ),
    ]);
    Some(cmd)
}

#[cfg(target_os = "windows")]
fn platform_command(title: &str, body: &str, timeout_secs: u32) -> Option<Command> {
    let mut cmd = Command::new("msg");
    cmd.args([
        "*",
        &format!("/TIME:{}", timeout_secs),
        &format!("{}: {}", title, body),
    ]);
    Some(cmd)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_command(_title: &str, _body: &str, _timeout_secs: u32) -> Option<Command> {
    None
}

// --- Backend 3: plain text echo ---

/// Last resort: one line on stdout. Fails only if the write itself
/// fails, which is the only way the whole chain can.
pub struct ConsoleEcho;

/// Plain-text rendering used by [`ConsoleEcho`].
pub fn render_plain(title: &str, body: &str) -> String {
    format!("[NOTIFICATION] {}: {}", title, body)
}

impl NotifyBackend for ConsoleEcho {
    fn name(&self) -> &'static str {
        "console-echo"
    }

    fn send(&self, title: &str, body: &str, _timeout_secs: u32) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", render_plain(title, body))?;
        out.flush()?;
        Ok(())
    }
}

// --- The chain ---

pub struct Notifier {
    backends: Vec<Box<dyn NotifyBackend>>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// The standard chain: toast, then notifier command, then stdout.
    pub fn new() -> Self {
        Self::with_backends(vec![
            Box::new(DesktopToast),
            Box::new(CommandNotifier),
            Box::new(ConsoleEcho),
        ])
    }

    /// Build a notifier over an explicit chain. Tests use this to
    /// substitute deterministic backends.
    pub fn with_backends(backends: Vec<Box<dyn NotifyBackend>>) -> Self {
        Self { backends }
    }

    /// Try each backend in order, stopping at the first success.
    /// Returns whether anything was delivered.
    pub fn deliver(&self, title: &str, body: &str, timeout_secs: u32) -> bool {
        for backend in &self.backends {
            match backend.send(title, body, timeout_secs) {
                Ok(()) => {
                    log::debug!("notification delivered via {}", backend.name());
                    return true;
                }
                Err(e) => {
                    log::debug!("notification backend {} failed: {:#}", backend.name(), e);
                }
            }
        }
        false
    }
}
