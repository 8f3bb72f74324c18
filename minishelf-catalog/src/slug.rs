//! Identifier derivation from human-readable titles.

/// Derive a filesystem-safe identifier from a title.
///
/// Lowercases, drops everything outside `a-z`, `0-9`, space, and hyphen,
/// turns separator runs into single hyphens, and trims hyphens from both
/// ends. The result is stable under re-application, and may be empty when
/// the title has no usable characters.
///
/// The same normalization is applied to categorical values (manufacturer,
/// game, faction) when locating their icon assets.
///
/// # Examples
///
/// ```
/// use minishelf_catalog::slug::slugify;
///
/// assert_eq!(slugify("Space Marine"), "space-marine");
/// assert_eq!(slugify("Warhammer 40,000"), "warhammer-40000");
/// assert_eq!(slugify("  T'au -- Empire  "), "tau-empire");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());

    for ch in title.chars() {
        let ch = ch.to_ascii_lowercase();
        match ch {
            'a'..='z' | '0'..='9' => out.push(ch),
            ' ' | '-' => {
                // Separator runs collapse to a single interior hyphen.
                if !out.is_empty() && !out.ends_with('-') {
                    out.push('-');
                }
            }
            _ => {}
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}
