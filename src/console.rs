//! Console output formatting with ANSI color support.
//!
//! Provides styled terminal output with automatic TTY detection
//! and respect for the NO_COLOR environment variable.

use crate::sources::{CatalogEntry, Chapter, Page, SeriesDetail, SeriesStatus};
use chrono::{DateTime, Local};
use std::io::{self, IsTerminal};

/// ANSI style codes for terminal formatting.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Style {
    /// Returns the ANSI escape code for this style.
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Red => "31",
            Style::Green => "32",
            Style::Yellow => "33",
            Style::Blue => "34",
            Style::Magenta => "35",
            Style::Cyan => "36",
            Style::Gray => "90",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Console output handler with color support detection.
#[derive(Debug)]
pub struct Console {
    colors_enabled: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Creates a new Console instance, detecting color support.
    ///
    /// Colors are disabled if:
    /// - The `NO_COLOR` environment variable is set
    /// - stdout is not a terminal (TTY)
    pub fn new() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err() && io::stdout().is_terminal();

        Self { colors_enabled }
    }

    /// Creates a Console with colors explicitly enabled or disabled.
    pub fn with_colors(enabled: bool) -> Self {
        Self {
            colors_enabled: enabled,
        }
    }

    /// Applies ANSI styles to text if colors are enabled.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.colors_enabled || styles.is_empty() {
            return text.to_string();
        }

        let codes: Vec<&str> = styles.iter().map(|s| s.code()).collect();
        format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
    }

    /// Creates a colored label like `[INFO]`.
    pub fn label(&self, label: &str, color: Style) -> String {
        let styled = self.style(label, &[color, Style::Bold]);
        format!("[{}]", styled)
    }

    /// Prints an info message with blue `[INFO]` label.
    pub fn info(&self, message: &str) {
        println!("{} {}", self.label("INFO", Style::Blue), message);
    }

    /// Prints a success message with green `[OK]` label.
    pub fn success(&self, message: &str) {
        println!("{} {}", self.label("OK", Style::Green), message);
    }

    /// Prints a warning message with yellow `[WARN]` label.
    pub fn warning(&self, message: &str) {
        println!("{} {}", self.label("WARN", Style::Yellow), message);
    }

    /// Prints an error message with red `[ERROR]` label.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.label("ERROR", Style::Red), message);
    }

    /// Prints a step message with cyan `[STEP]` label.
    pub fn step(&self, message: &str) {
        println!("{} {}", self.label("STEP", Style::Cyan), message);
    }

    /// Prints a section header in magenta bold.
    pub fn section(&self, message: &str) {
        println!();
        println!("{}", self.style(message, &[Style::Magenta, Style::Bold]));
    }

    /// Returns text styled as muted (dim gray).
    pub fn muted(&self, text: &str) -> String {
        self.style(text, &[Style::Gray, Style::Dim])
    }

    /// Formats a listing entry as `title  url`.
    pub fn entry_line(&self, entry: &CatalogEntry) -> String {
        format!(
            "{}  {}",
            self.style(&entry.title, &[Style::Bold]),
            self.muted(&entry.url)
        )
    }

    /// Formats a chapter as `number  name  upload date  url`.
    pub fn chapter_line(&self, chapter: &Chapter) -> String {
        format!(
            "{:>10}  {}  {}  {}",
            chapter.chapter_number,
            chapter.name,
            self.style(&format_timestamp(chapter.upload_timestamp), &[Style::Yellow]),
            self.muted(&chapter.url)
        )
    }

    /// Formats a page as `#index image url`.
    pub fn page_line(&self, page: &Page) -> String {
        format!("{} {}", self.style(&format!("#{:03}", page.index), &[Style::Cyan]), page.image_url)
    }

    /// Prints every field of a series detail.
    pub fn detail(&self, detail: &SeriesDetail) {
        let status = match detail.status {
            SeriesStatus::Ongoing => self.style("Ongoing", &[Style::Green]),
            SeriesStatus::Completed => self.style("Completed", &[Style::Blue]),
            SeriesStatus::Unknown => self.muted("Unknown"),
        };

        println!("{}", self.style(&detail.title, &[Style::Bold]));
        println!("  Authors: {}", detail.author);
        println!("  Genres:  {}", detail.genre);
        println!("  Status:  {}", status);
        if let Some(thumbnail) = &detail.thumbnail_url {
            println!("  Cover:   {}", self.muted(thumbnail));
        }
        if !detail.description.is_empty() {
            println!();
            println!("{}", detail.description);
        }
    }
}

/// Renders epoch milliseconds as a local date, or `unknown` for 0.
pub fn format_timestamp(millis: i64) -> String {
    if millis == 0 {
        return "unknown".to_string();
    }

    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
