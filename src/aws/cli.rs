//! AWS CLI command execution.
//!
//! Runs `aws` commands as subprocesses and returns their stdout.

use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved,
/// so filter expressions like `'Name=state,Values=available'` survive intact.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command fails or produces too much output
pub fn run(cmd: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let args: Vec<&str> = split_and_strip(cmd);
    log::trace!("split args={:?}", args);

    let mut command = Command::new(args[0]);
    for arg in args.iter().skip(1) {
        command.arg(arg);
    }

    let output = command.output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        format!("Failed to execute command: {}", e)
    })?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        // A zone listing is a few KB; anything near this size is not one.
        if output.stdout.len() > 500_000 {
            return Err(format!(
                "Response too large: {} bytes for command: {:?}",
                output.stdout.len(),
                args
            )
            .into());
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\nstderr=\n{stderr}",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running: {stderr}").into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;

    Ok(stdout)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
