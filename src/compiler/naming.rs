//! Field-name and option-id synthesis.
//!
//! Names are built from positional indices, so they are unique across the whole document
//! even when two headings sanitize to the same text or to nothing at all.

/// Replaces every character that is not an ASCII letter with `_`, one for one.
pub fn sanitize_heading(heading: &str) -> String {
    heading
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { '_' })
        .collect()
}

/// `screen_<screen_index>_<sanitized heading>_<content_index>`
pub fn field_name(screen_index: usize, content_index: usize, heading: &str) -> String {
    format!(
        "screen_{}_{}_{}",
        screen_index,
        sanitize_heading(heading),
        content_index
    )
}

/// `<screen_index>_<content_index>_<option_index>`, upper-cased.
pub fn option_id(screen_index: usize, content_index: usize, option_index: usize) -> String {
    format!("{}_{}_{}", screen_index, content_index, option_index).to_uppercase()
}
