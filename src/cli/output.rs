//! Output formatting utilities

use crate::domain::{Entry, SaveOutcome};

/// Format the entry list for display, followed by the pending action.
///
/// `edit_cursor` marks the entry being edited, if any.
pub fn format_entry_list(entries: &[Entry], edit_cursor: Option<usize>) -> String {
    let mut output = String::new();

    if entries.is_empty() {
        output.push_str("No entries yet\n");
    }

    for (index, entry) in entries.iter().enumerate() {
        let marker = if edit_cursor == Some(index) { '*' } else { ' ' };
        output.push_str(&format!("{}{:>3}  {}\n", marker, index, entry.text));
        if let Some(timestamp) = &entry.timestamp {
            output.push_str(&format!("      {}\n", timestamp));
        }
    }

    match edit_cursor {
        Some(index) => output.push_str(&format!(
            "\nEditing entry {}: next 'goodthings save <text>' will Update it\n",
            index
        )),
        None => output.push_str("\nNext 'goodthings save <text>' will Save a new entry\n"),
    }

    output
}

/// Describe what a save did
pub fn format_save_outcome(outcome: SaveOutcome) -> String {
    match outcome {
        SaveOutcome::Ignored => "Nothing to save (empty entry)".to_string(),
        SaveOutcome::Created => "Saved entry".to_string(),
        SaveOutcome::Updated { index } => format!("Updated entry {}", index),
    }
}
