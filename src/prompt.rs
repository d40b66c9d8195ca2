use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prompt user with a message and return their trimmed input.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Ask for the GitHub username to analyze
pub fn prompt_for_username() -> Result<String> {
    let username = prompt("Enter GitHub username: ")?;
    if username.is_empty() {
        anyhow::bail!("Username is required");
    }
    Ok(username)
}

/// Read a secret without echoing it
pub fn prompt_hidden(message: &str) -> Result<String> {
    let value = rpassword::prompt_password(message).context("Failed to read from terminal")?;
    Ok(value.trim().to_string())
}
