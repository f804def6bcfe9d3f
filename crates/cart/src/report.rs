//! Plain-text rendering of a shopping list.

use crate::ShoppingList;

pub const FILENAME: &str = "shopping_list.txt";

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub fn content_disposition() -> String {
    format!("attachment; filename=\"{FILENAME}\"")
}

/// One `"<name> (<unit>) — <amount>"` row per line, each ending with `\n`.
///
/// An empty list renders an empty string.
pub fn render(list: &ShoppingList) -> String {
    list.lines
        .iter()
        .map(|line| format!("{} — {}\n", line.identity, line.total_amount))
        .collect()
}
