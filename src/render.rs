// 🎨 Console rendering - messages and the contact table

use crate::directory::Listing;
use crossterm::style::Stylize;

pub const EMPTY_BOOK: &str = "Empty Contact Book";
const NAME_HEADER: &str = "Name";
const PHONE_HEADER: &str = "Contact Number";

/// Applies color to console messages when enabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Painter { color }
    }

    pub fn plain() -> Self {
        Painter { color: false }
    }

    pub fn success(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render a listing as a two-column table, or the empty-book message
pub fn render_listing(listing: &Listing, painter: &Painter) -> String {
    let entries = match listing {
        Listing::Empty => return painter.warning(EMPTY_BOOK),
        Listing::Entries(entries) => entries,
    };

    let width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME_HEADER.len());

    let header = format!("{:<width$}    {}", NAME_HEADER, PHONE_HEADER, width = width);
    let mut lines = vec![painter.header(&header)];

    for entry in entries {
        lines.push(format!("{:<width$}    {}", entry.name, entry.phone, width = width));
    }

    lines.join("\n")
}
