// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors::{self, Role};
use clap::builder::styling::Styles;

/// Generate clap Styles matching the help color roles.
pub fn styles() -> Styles {
    use anstyle::{Ansi256Color, Color, Style};

    if !colors::should_colorize() {
        return Styles::plain();
    }

    let role = |r: Role| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(r.code()))));

    Styles::styled()
        .header(role(Role::Header))
        .usage(role(Role::Header))
        .literal(role(Role::Literal))
        .placeholder(role(Role::Context))
        .valid(role(Role::Context))
}

/// Main help template with a colorized Options header.
pub fn template() -> String {
    let options_header = colors::paint(Role::Header, "Options:");
    [
        "{about-with-newline}",
        "{usage-heading} {usage}",
        "",
        &format!("{{before-help}}{options_header}"),
        "{options}{after-help}",
    ]
    .join("\n")
}

/// Commands list shown before options in main help, grouped by theme.
pub fn commands() -> String {
    let sections: &[(&str, &[(&str, &str)])] = &[
        (
            "Reports:",
            &[
                ("bug-map", "Map bug concentration by functional area/endpoint"),
                ("coverage-map", "Map test coverage by functional area/endpoint"),
                ("panorama", "Show the project panorama (highlights + totals)"),
                ("pareto", "80/20 volume analysis of bugs or test cases"),
                ("classify", "List issues with their derived facets"),
            ],
        ),
        (
            "Setup & Configuration:",
            &[
                ("init", "Initialize report configuration"),
                ("completion", "Generate shell completions"),
            ],
        ),
    ];

    let mut out = Vec::new();
    for (title, rows) in sections {
        if !out.is_empty() {
            out.push(String::new());
        }
        out.push(colors::paint(Role::Header, title));
        for (name, description) in *rows {
            // Pad before painting so escape codes don't skew the column.
            let padded = format!("{:<13}", name);
            out.push(format!("  {}{}", colors::paint(Role::Literal, &padded), description));
        }
    }
    out.join("\n")
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  bussola init --project cin          Initialize configuration
  bussola bug-map -i issues.jsonl     Where do bugs concentrate?
  bussola pareto bugs -i issues.jsonl Which areas explain 80% of volume?
  bussola panorama -i issues.jsonl    Project health at a glance",
    )
}
