//! Linux-safe sanitization of derived labels.

/// Sanitizes a domain label for safe use as a Linux filename stem.
///
/// Hosts are already restricted, but IPv6 literals, percent-encoded
/// registered names and hostile input files can still smuggle in characters
/// a path must not contain:
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing underscores and dots
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_underscore = false;

    for c in label.chars() {
        let safe = !(c == '\0' || c == '/' || c == '\\' || c.is_whitespace() || c.is_control());
        if safe {
            out.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }

    out.trim_matches(|c| c == '_' || c == '.').to_string()
}
