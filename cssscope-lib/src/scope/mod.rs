//! The selector scoping engine.
//!
//! One pass over the lines of a stylesheet: [`classifier`] decides what each
//! line is, [`selector`] rewrites the rule openers that need a prefix. Every
//! other line is emitted byte for byte.

pub mod classifier;
pub mod selector;

use classifier::ScanState;
use log::trace;

/// Counters gathered while scoping one stylesheet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScopeReport {
    /// Number of lines in the input (and the output).
    pub lines: usize,
    /// Selector lines that received the prefix.
    pub rewritten: usize,
    /// Selector lines left alone: already scoped or global.
    pub skipped: usize,
}

/// Scopes every top-level rule of `css` under `prefix`.
///
/// `prefix` is expected to be a class selector such as `.dashboard`; see
/// [`crate::ScopePrefix`] for normalizing user input.
pub fn transform(css: &str, prefix: &str) -> String {
    transform_with_report(css, prefix).0
}

/// Same as [`transform`], also returning what was changed.
pub fn transform_with_report(css: &str, prefix: &str) -> (String, ScopeReport) {
    let mut report = ScopeReport::default();
    let mut state = ScanState::default();
    let mut output = Vec::new();

    for (idx, raw) in css.split('\n').enumerate() {
        report.lines += 1;

        // A CRLF terminator stays with the line it came from.
        let (line, cr) = match raw.strip_suffix('\r') {
            Some(line) => (line, "\r"),
            None => (raw, ""),
        };

        let (kind, next) = state.classify(line);
        trace!("line {}: {:?} ({:?} -> {:?})", idx + 1, kind, state, next);
        state = next;

        if !kind.is_selector() {
            output.push(raw.to_string());
            continue;
        }

        match selector::scope_selector_line(line, prefix) {
            Some(scoped) => {
                report.rewritten += 1;
                output.push(format!("{}{}", scoped, cr));
            }
            None => {
                report.skipped += 1;
                output.push(raw.to_string());
            }
        }
    }

    (output.join("\n"), report)
}
