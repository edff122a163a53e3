//! Selector rewriting for a single rule opener line.

/// Selectors that target the document itself. Nesting them under a wrapper
/// class would never match anything, so they are left alone.
const GLOBAL_SELECTORS: &[&str] = &[":root", "html", "body", "*"];

/// True if the selector starts with one of the document-level selectors.
pub fn is_global_selector(selector_text: &str) -> bool {
    GLOBAL_SELECTORS
        .iter()
        .any(|global| selector_text.starts_with(global))
}

/// Prepends `prefix` to every selector in a (possibly comma separated)
/// selector list.
///
/// A fragment that starts with `:` has no base selector (e.g. `:hover`), so
/// it is glued straight onto the prefix. Everything else becomes a
/// descendant of the prefix.
///
/// ```
/// use cssscope_lib::scope::selector::rewrite_selector;
///
/// assert_eq!(rewrite_selector("a, b:hover", ".scope"), ".scope a, .scope b:hover");
/// assert_eq!(rewrite_selector(":hover", ".page"), ".page:hover");
/// ```
pub fn rewrite_selector(selector_text: &str, prefix: &str) -> String {
    selector_text
        .split(',')
        .map(|fragment| scope_fragment(fragment.trim(), prefix))
        .collect::<Vec<_>>()
        .join(", ")
}

fn scope_fragment(fragment: &str, prefix: &str) -> String {
    if fragment.starts_with(':') {
        format!("{}{}", prefix, fragment)
    } else {
        format!("{} {}", prefix, fragment)
    }
}

/// Rewrites a rule opener line such as `  .card, .tile {`.
///
/// Returns `None` when the line must be emitted unchanged: it has no `{`,
/// its selector already starts with `prefix`, or it is a global selector.
/// The leading whitespace of `line` is kept as is and everything from the
/// first `{` onwards is carried over untouched.
pub fn scope_selector_line(line: &str, prefix: &str) -> Option<String> {
    let trimmed = line.trim();
    let brace = trimmed.find('{')?;
    let selector_part = trimmed[..brace].trim();
    let rest_part = &trimmed[brace..];

    if selector_part.starts_with(prefix) || is_global_selector(selector_part) {
        return None;
    }

    let indent = &line[..line.len() - line.trim_start().len()];
    Some(format!(
        "{}{} {}",
        indent,
        rewrite_selector(selector_part, prefix),
        rest_part
    ))
}
