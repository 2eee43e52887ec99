// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling for help output.
//!
//! `NO_COLOR=1` disables colors, `COLOR=1` forces them; otherwise they
//! follow stdout being a TTY. Report output itself is always plain so
//! it can be piped and diffed.

use std::io::IsTerminal;

/// Roles a piece of help text can play, each with its ANSI 256 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Section titles: pastel steel blue.
    Header,
    /// Commands and flags: light grey.
    Literal,
    /// Hints and defaults: medium grey.
    Context,
}

impl Role {
    /// ANSI 256 foreground code for this role.
    pub fn code(self) -> u8 {
        match self {
            Role::Header => 74,
            Role::Literal => 250,
            Role::Context => 245,
        }
    }
}

/// Whether help output should carry ANSI colors.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").as_deref() == Ok("1") {
        return false;
    }
    if std::env::var("COLOR").as_deref() == Ok("1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Paint text in a role's color, or pass it through unchanged when
/// colors are off.
pub fn paint(role: Role, text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    format!("\x1b[38;5;{}m{}\x1b[0m", role.code(), text)
}

/// Colorize an examples help block line by line.
///
/// Section headers (lines ending with `:`) take the header role; on
/// example lines the command column (everything before the first run of
/// two spaces) takes the literal role and the description stays plain.
pub fn examples(text: &str) -> String {
    let lines: Vec<String> = text.lines().map(colorize_example_line).collect();
    lines.join("\n")
}

fn colorize_example_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if trimmed.ends_with(':') && !trimmed.contains("  ") {
        return format!("{indent}{}", paint(Role::Header, trimmed));
    }
    match trimmed.find("  ") {
        Some(split) => {
            let (cmd, desc) = trimmed.split_at(split);
            format!("{indent}{}{desc}", paint(Role::Literal, cmd))
        }
        None => line.to_string(),
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
