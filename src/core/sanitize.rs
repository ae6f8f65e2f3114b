// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Filesystem-friendly stem: alphanumerics kept, whitespace runs become '_',
/// '-' and '_' kept, everything else dropped.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_tabs_and_newlines() {
        assert_eq!(normalize_ws(" a\t\tb \n c "), "a b c");
    }

    #[test]
    fn sanitize_filename_variants() {
        assert_eq!(sanitize_filename("New York (Own) 2 BR", "x"), "New_York_Own_2_BR");
        assert_eq!(sanitize_filename("5-49 Units", "x"), "5-49_Units");
        assert_eq!(sanitize_filename("()", "table"), "table");
    }
}
