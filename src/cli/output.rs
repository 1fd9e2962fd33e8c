use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use colored::Colorize;
use inquire::{InquireError, Password, PasswordDisplayMode};

use crate::app::notify::{Notice, NoticeLevel, Notifier};
use crate::domain::errors::FieldErrors;

/// Prints notices as they happen: success and info on stdout, the rest on stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message.green()),
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Warning => eprintln!("{}", notice.message.yellow()),
            NoticeLevel::Error => eprintln!("{}", notice.message.red()),
        }
    }
}

pub fn print_field_errors(errors: &FieldErrors) {
    for error in errors.iter() {
        eprintln!("  {} {}", format!("{}:", error.field).yellow(), error.message);
    }
}

/// Asks `question` on stdout; only `y`/`yes` confirms
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let answer = read_line()?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Prompts for a value on stdin
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_line()
}

/// Prompts for a secret with masked input
///
/// Falls back to a plain stdin read when no terminal is attached, so piped
/// input keeps working.
pub fn password(label: &str) -> anyhow::Result<String> {
    let answer = Password::new(&format!("{}:", label))
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt();
    masked_or_fallback(answer, || prompt(label))
}

fn masked_or_fallback<F>(
    answer: Result<String, InquireError>,
    fallback: F,
) -> anyhow::Result<String>
where
    F: FnOnce() -> io::Result<String>,
{
    match answer {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            anyhow::bail!("cancelled")
        }
        Err(e) => {
            tracing::debug!(error = %e, "masked prompt unavailable, reading stdin");
            Ok(fallback()?)
        }
    }
}

fn read_line() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

pub fn optional_timestamp(at: Option<&DateTime<Utc>>) -> String {
    at.map(timestamp).unwrap_or_else(|| "-".to_string())
}

/// Truncates to `width` characters with a trailing `~`
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('~');
    clipped
}

pub fn page_footer(page: usize, pages: usize, total: usize) {
    println!("\n  page {}/{} ({} total)", page, pages, total);
}
