//! URL identifiers derived from display names.

/// Lowercase `name`, collapsing every run of non-ASCII-alphanumeric
/// characters into a single `-` and trimming dashes at either end.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;
