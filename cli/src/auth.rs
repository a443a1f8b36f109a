//! OS-login authentication.
//!
//! Commands that touch stored credentials first verify the invoking
//! user's OS password by running `su <user> -c true` with the password
//! on stdin. Exit status 0 means the password was accepted.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::prompt;

/// Prompts for the current user's OS password and verifies it.
///
/// The username comes from `$USER`, falling back to an interactive
/// prompt when unset.
pub fn authenticate() -> Result<(), String> {
    let username = match std::env::var("USER") {
        Ok(user) if !user.is_empty() => user,
        _ => prompt::line("Username")?,
    };

    let password = rpassword::prompt_password("Password: ")
        .map_err(|err| format!("failed to read password: {err}"))?;

    let mut child = Command::new("su")
        .arg(&username)
        .arg("-c")
        .arg("true")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| format!("failed to run su: {err}"))?;

    if let Some(stdin) = child.stdin.as_mut() {
        let _ = writeln!(stdin, "{password}");
    }

    let status = child
        .wait()
        .map_err(|err| format!("failed to wait for su: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err("login failed: incorrect password".to_string())
    }
}
