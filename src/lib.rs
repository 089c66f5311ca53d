//! Publishes the last week of WakaTime language statistics into a GitHub gist as a small text
//! table with progress bars, ready to be pinned on a profile.
//!

pub mod api;
pub mod cli;
pub mod utils;
