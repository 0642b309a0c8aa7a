// File: src/scheduler.rs
//! Registration of the daily scheduled task.
//!
//! Only Windows task scheduling is supported; the installer delegates
//! to `schtasks` and reports its exit code. The scheduled task runs
//! this program with `--now` once a day at the requested time.

use thiserror::Error;

/// Fixed task name. Re-installing overwrites the existing task.
pub const TASK_NAME: &str = "Quotidie";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Scheduled task installation is only supported on Windows.")]
    UnsupportedPlatform,
    #[error("Time must be in 24-hour HH:MM format, e.g., 09:00 for 9 AM.")]
    InvalidTime,
}

/// Validate a strict 24-hour `HH:MM` string.
///
/// Both fields must be two digits: `9:00` is rejected even though a
/// lenient time parser would take it, so that what lands in `schtasks`
/// is exactly what the user typed and verified.
pub fn parse_hhmm(input: &str) -> Result<(u8, u8), ScheduleError> {
    let b = input.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return Err(ScheduleError::InvalidTime);
    }
    if ![b[0], b[1], b[3], b[4]].iter().all(u8::is_ascii_digit) {
        return Err(ScheduleError::InvalidTime);
    }
    let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
    let minute = (b[3] - b'0') * 10 + (b[4] - b'0');
    if hour > 23 || minute > 59 {
        return Err(ScheduleError::InvalidTime);
    }
    Ok((hour, minute))
}

/// Install (or overwrite) the daily task at `hhmm`.
///
/// Returns the process exit code for the operation: 0 on success, the
/// `schtasks` exit code on scheduler failure, 1 on validation or
/// platform failure. Diagnostics are printed rather than propagated;
/// a failed installation is not fatal to the caller.
pub fn install_daily(hhmm: &str) -> i32 {
    if !cfg!(target_os = "windows") {
        println!("{}", ScheduleError::UnsupportedPlatform);
        return 1;
    }

    if let Err(e) = parse_hhmm(hhmm) {
        println!("{}", e);
        return 1;
    }

    match create_task(hhmm) {
        Ok(code) => code,
        Err(e) => {
            println!("Error while creating scheduled task: {:#}", e);
            1
        }
    }
}

#[cfg(target_os = "windows")]
fn create_task(hhmm: &str) -> anyhow::Result<i32> {
    use anyhow::Context;
    use std::process::Command;

    let runner = resolve_runner()?;
    let run_cmd = format!("\"{}\" --now", runner.display());

    let output = Command::new("schtasks")
        .args([
            "/Create", "/TN", TASK_NAME, "/SC", "DAILY", "/ST", hhmm, "/TR", &run_cmd, "/F",
        ])
        .output()
        .context("Failed to run schtasks")?;

    if output.status.success() {
        println!("Scheduled task '{}' set for {}.", TASK_NAME, hhmm);
        Ok(0)
    } else {
        println!(
            "Failed to create scheduled task. Output:\n{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(output.status.code().unwrap_or(1))
    }
}

/// Resolve the binary the task should run.
///
/// Prefers a windowed-subsystem companion build (`<stem>w.exe`) sitting
/// next to the current executable, so the scheduled run does not flash
/// a console window; falls back to the current executable.
#[cfg(target_os = "windows")]
fn resolve_runner() -> anyhow::Result<std::path::PathBuf> {
    use anyhow::Context;

    let exe = std::env::current_exe().context("Could not determine executable location")?;
    if let Some(stem) = exe.file_stem().and_then(|s| s.to_str()) {
        let windowed = exe.with_file_name(format!("{}w.exe", stem));
        if windowed.exists() {
            return Ok(windowed);
        }
    }
    Ok(exe)
}

#[cfg(not(target_os = "windows"))]
fn create_task(_hhmm: &str) -> anyhow::Result<i32> {
    // install_daily gates on the platform before getting here.
    Err(ScheduleError::UnsupportedPlatform.into())
}
