//! Input sanitization for contact submissions.

/// Remove control characters except newlines, carriage returns, and tabs.
pub fn strip_control_chars(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\r' || *c == '\t')
        .collect()
}

/// Replace markup-significant characters with HTML entities.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

const GMAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];
const PLUS_TAG_DOMAINS: &[&str] = &[
    "outlook.com",
    "hotmail.com",
    "live.com",
    "msn.com",
    "icloud.com",
    "me.com",
    "mac.com",
];
const DASH_TAG_DOMAINS: &[&str] = &["yahoo.com", "ymail.com", "rocketmail.com"];

/// Normalize an email address to its canonical form.
///
/// The address is lowercased. Provider-specific aliases are removed:
/// Gmail drops dots and `+tag` suffixes, Outlook and iCloud drop `+tag`
/// suffixes, Yahoo drops `-tag` suffixes. Returns `None` if the input has no
/// `@` separator.
pub fn normalize_email(value: &str) -> Option<String> {
    let lowered = value.trim().to_lowercase();
    let (local, domain) = lowered.rsplit_once('@')?;
    if local.is_empty() || domain.is_empty() {
        return None;
    }

    let (local, domain) = if GMAIL_DOMAINS.contains(&domain) {
        let base = strip_tag(local, '+');
        (base.replace('.', ""), "gmail.com")
    } else if PLUS_TAG_DOMAINS.contains(&domain) {
        (strip_tag(local, '+').to_string(), domain)
    } else if DASH_TAG_DOMAINS.contains(&domain) {
        (strip_tag(local, '-').to_string(), domain)
    } else {
        (local.to_string(), domain)
    };

    if local.is_empty() {
        return Some(lowered);
    }

    Some(format!("{local}@{domain}"))
}

/// Cut `local` at the first `sep`, keeping the original if nothing would remain.
fn strip_tag(local: &str, sep: char) -> &str {
    match local.split_once(sep) {
        Some((base, _)) if !base.is_empty() => base,
        _ => local,
    }
}
