//! Interactive terminal prompts.

use std::io::{self, BufRead, Write};

/// Prompts for one line of input.
pub fn line(label: &str) -> Result<String, String> {
    print!("{label}: ");
    io::stdout()
        .flush()
        .map_err(|err| format!("failed to flush stdout: {err}"))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|err| format!("failed to read input: {err}"))?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts for one line, returning `default` when the input is empty.
pub fn line_with_default(label: &str, default: &str) -> Result<String, String> {
    let input = line(&format!("{label} [{default}]"))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompts for a password twice with hidden input; the entries must match.
pub fn hidden_confirmed(label: &str) -> Result<String, String> {
    let first = rpassword::prompt_password(format!("{label}: "))
        .map_err(|err| format!("failed to read password: {err}"))?;
    let second = rpassword::prompt_password("Repeat for confirmation: ")
        .map_err(|err| format!("failed to read password: {err}"))?;

    if first == second {
        Ok(first)
    } else {
        Err("entries do not match".to_string())
    }
}

/// Asks a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> Result<bool, String> {
    let answer = line(&format!("{question} [y/N]"))?;
    Ok(matches!(answer.as_str(), "y" | "Y" | "yes" | "Yes"))
}
