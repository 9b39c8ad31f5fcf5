//! Terminal render target for the command-line client.
//!
//! [`ConsoleTarget`] stands in for the browser page: each region update is
//! printed under a coloured header, the busy indicator is a spinner on
//! stderr, and alerts go to stderr in red.

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

use crate::render::RenderTarget;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    if is_terminal() {
        println!("{}", format!("━━━ {} ━━━", title).bold().cyan());
    } else {
        println!("━━━ {} ━━━", title);
    }
}

/// Print an error line to stderr.
pub fn print_error(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "✗".red().bold(), msg.red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// A loading spinner.
pub struct Spinner {
    pb: indicatif::ProgressBar,
}

impl Spinner {
    /// Create a new spinner with the given message.
    pub fn new(msg: &str) -> Self {
        let pb = indicatif::ProgressBar::new_spinner();
        if let Ok(style) = indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Remove the spinner from the terminal.
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

/// Render target printing to the terminal
pub struct ConsoleTarget {
    category_options: Vec<String>,
    /// Regions that are not printed (e.g. the query URL in quiet mode)
    hidden: Vec<String>,
    spinner: Mutex<Option<Spinner>>,
}

impl ConsoleTarget {
    pub fn new(category_options: Vec<String>) -> Self {
        Self {
            category_options,
            hidden: Vec::new(),
            spinner: Mutex::new(None),
        }
    }

    /// Do not print updates to `element_id`.
    pub fn hide(mut self, element_id: impl Into<String>) -> Self {
        self.hidden.push(element_id.into());
        self
    }

    fn spinner(&self) -> std::sync::MutexGuard<'_, Option<Spinner>> {
        self.spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RenderTarget for ConsoleTarget {
    fn set_content(&self, element_id: &str, html: &str) {
        // Printed output is append-only, so clearing a region prints nothing.
        if html.is_empty() || self.hidden.iter().any(|id| id == element_id) {
            return;
        }
        print_section(element_id);
        println!("{}", html);
    }

    fn set_busy(&self, busy: bool) {
        let mut spinner = self.spinner();
        if busy {
            if spinner.is_none() && std::io::stderr().is_terminal() {
                *spinner = Some(Spinner::new("Searching..."));
            }
        } else if let Some(active) = spinner.take() {
            active.finish();
        }
    }

    fn alert(&self, message: &str) {
        print_error(message);
    }

    fn set_query_field(&self, value: &str) {
        tracing::debug!(query = %value, "Search form query field set");
    }

    fn category_options(&self) -> Vec<String> {
        self.category_options.clone()
    }

    fn select_category(&self, index: Option<usize>) {
        let selected = index.and_then(|i| self.category_options.get(i));
        tracing::debug!(category = ?selected, "Search form category selected");
    }
}
