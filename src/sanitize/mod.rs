use unicode_normalization::UnicodeNormalization;

#[cfg(test)]
mod test;

/// Maximum length of a page's parent path plus its name, in UTF-16 code
/// units. EDS rejects page paths longer than this.
pub const EDS_CHAR_LIMIT: usize = 900;

/// Normalizes a user-provided page name into its canonical EDS form.
///
/// Lower-cases the input, decomposes accented characters and drops their
/// combining marks, replaces every run of characters outside `[a-z0-9]` with
/// a single dash, and trims a dash from either end. Total over all input;
/// the result is empty when the input has no alphanumeric characters.
pub fn sanitize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for ch in lowered.nfd().filter(|ch| !is_diacritic_mark(*ch)) {
        if matches!(ch, 'a'..='z' | '0'..='9') {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    out
}

/// A name is valid when it is already in canonical sanitized form.
pub fn is_valid_name(name: &str) -> bool {
    sanitize_name(name) == name
}

/// Whether `parent_path` joined with `name` stays within [EDS_CHAR_LIMIT].
///
/// Lengths are counted in UTF-16 code units, matching the admin UI's string
/// length semantics. The caller supplies the parent path; in the admin UI it
/// is derived from the create-page wizard's location.
pub fn is_valid_full_page_path(name: &str, parent_path: &str) -> bool {
    let full_path_len = parent_path.encode_utf16().count() + name.encode_utf16().count();
    full_path_len <= EDS_CHAR_LIMIT
}

/// Combining diacritical marks block, dropped after decomposition.
fn is_diacritic_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036f}')
}
