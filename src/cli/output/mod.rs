//! Text rendering of the language statistics. Every row has the same layout:
//!
//! ```text
//! Rust      12 hrs 3 mins [#############......] 70.1%
//! ```
//!
//! The name, time, bar and percent columns are [NAME_LEN], [TIME_LEN], [BAR_LEN] and
//! [PERCENT_LEN] + 1 characters wide.

pub mod progress_bar;

use progress_bar::render_bar;

use crate::api::entities::{LanguageStat, Stats};

pub const NAME_LEN: usize = 10;
pub const TIME_LEN: usize = 14;
pub const BAR_LEN: usize = 21;
pub const PERCENT_LEN: usize = 5;

/// Only the top of the ranking makes it into the report.
pub const MAX_LANGUAGES: usize = 5;

/// Names shorter than [NAME_LEN] are padded, longer ones are cut and end with a `.`.
pub fn format_name(name: &str) -> String {
    if name.chars().count() < NAME_LEN {
        format!("{name:<NAME_LEN$}")
    } else {
        let mut cut = name.chars().take(NAME_LEN - 1).collect::<String>();
        cut.push('.');
        cut
    }
}

/// Pads to [TIME_LEN]. Longer durations are kept whole.
pub fn format_time(text: &str) -> String {
    format!("{text:<TIME_LEN$}")
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent:>PERCENT_LEN$.1}%")
}

pub fn format_line(language: &LanguageStat) -> String {
    let mut line = format_name(&language.name);
    line.push_str(&format_time(&language.text));
    line.push_str(&render_bar(language.percent, BAR_LEN));
    line.push_str(&format_percent(*language.percent));
    line
}

/// Renders the first [MAX_LANGUAGES] languages in the order they were given, one per line, with
/// no trailing newline.
pub fn format_content(stats: &Stats) -> String {
    stats
        .languages
        .iter()
        .take(MAX_LANGUAGES)
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}
