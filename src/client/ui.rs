//! Terminal input utilities for the client.

use std::io::Write;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::domain::validate_username;

/// Redisplay the prompt after printing a received message
pub fn redisplay_prompt(username: &str) {
    print!("{}> ", username);
    std::io::stdout().flush().ok();
}

/// Prompt for a display name until a valid one is entered.
///
/// An empty submission accepts the cached default when one exists. Returns
/// `None` when the user aborts (Ctrl+C / Ctrl+D) without entering a name.
pub fn prompt_username(cached: Option<&str>) -> Option<String> {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize readline: {}", e);
            return None;
        }
    };

    let prompt = match cached {
        Some(default) => format!("Enter your username [{}]: ", default),
        None => "Enter your username: ".to_string(),
    };

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                let candidate = if line.is_empty() {
                    match cached {
                        Some(default) => default,
                        None => continue,
                    }
                } else {
                    line
                };
                match validate_username(candidate) {
                    Ok(()) => return Some(candidate.to_string()),
                    Err(e) => {
                        eprintln!("Invalid username: {}", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return None,
            Err(err) => {
                eprintln!("Readline error: {}", err);
                return None;
            }
        }
    }
}
