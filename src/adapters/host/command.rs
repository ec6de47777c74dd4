//! Shell command execution

use std::process::Command;

use log::debug;

use crate::core::models::ProbeError;

/// Run `command` through the platform shell and capture stdout
///
/// Blocks until the process exits. Non-zero exit status is an error and no
/// partial output is returned.
pub fn run_shell(command: &str) -> Result<String, ProbeError> {
    let output = shell(command)
        .output()
        .map_err(|e| ProbeError::Command(format!("failed to run `{command}`: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("`{command}` stderr: {}", stderr.trim_end());
        return Err(ProbeError::Command(format!("`{command}` returned {}", output.status)));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // cmd.exe does not understand MSVC-style `\"` escapes. With /S it strips
    // exactly the outer quote pair and runs the rest verbatim.
    let mut cmd = Command::new("cmd");
    cmd.args(["/S", "/C"]).raw_arg(format!("\"{command}\""));
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
