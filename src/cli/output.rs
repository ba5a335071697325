//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

/// Print the application header with name and version.
pub fn header(version: &str) {
    println!(
        "{} {}",
        "kalshibot".if_supports_color(Stream::Stdout, |t| t.bold()),
        version.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!(
        "  {:<24} {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        message
    );
}

/// Print a warning line.
pub fn warning(message: &str) {
    eprintln!(
        "  {} {}",
        "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
        message
    );
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}

/// Mask a credential for display, keeping only a short prefix.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let count = secret.chars().count();
    if count >= 12 {
        let head: String = secret.chars().take(4).collect();
        let tail: String = secret.chars().skip(count - 4).collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_secret_hides_short_values() {
        assert_eq!(mask_secret(""), "(not set)");
        assert_eq!(mask_secret("k1"), "****");
        assert_eq!(mask_secret("sk-abcdefghijklmnop"), "sk-a...mnop");
    }

    #[test]
    fn mask_secret_handles_multibyte() {
        assert_eq!(mask_secret("ключключключключ"), "ключ...ключ");
    }
}
