//! Per-line classification of stylesheet text.
//!
//! The scanner never looks ahead: each line is classified from its own text
//! and the [`ScanState`] left behind by the previous line.

/// Lines starting with one of these are always emitted verbatim. `*` also
/// covers the continuation lines of a block comment.
const LITERAL_PREFIXES: &[&str] = &["@import", "/*", "*"];

/// An at-rule whose body is passed through without scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtRule {
    /// `@media`
    Media,
    /// `@keyframes`
    Keyframes,
}

/// Scanner state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    /// Inside a `/* ... */` comment. `resume` is the at-rule block that was
    /// open when the comment started; it is active again once the comment
    /// closes.
    InComment { resume: Option<AtRule> },
    /// Inside the body of an `@media` or `@keyframes` block.
    InAtRuleBlock(AtRule),
}

/// What a line was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `@import`, a comment opener or a `*` comment line.
    Literal,
    /// Contains `*/`.
    CommentClose,
    /// Inside (or opening) a block comment.
    Comment,
    /// `@media` or `@keyframes` opener.
    AtRuleOpen(AtRule),
    /// Any line in the body of an at-rule block, nested rules included.
    InAtRule,
    /// The bare `}` that ends an at-rule block.
    AtRuleClose,
    /// A rule opener whose selector may be scoped.
    Selector,
    /// Declarations, closing braces, other at-rules, blank lines.
    Other,
}

impl LineKind {
    /// Only selector lines are ever rewritten.
    pub fn is_selector(self) -> bool {
        self == LineKind::Selector
    }
}

impl ScanState {
    fn at_rule(self) -> Option<AtRule> {
        match self {
            ScanState::Normal => None,
            ScanState::InComment { resume } => resume,
            ScanState::InAtRuleBlock(at_rule) => Some(at_rule),
        }
    }

    fn outside_comment(at_rule: Option<AtRule>) -> ScanState {
        match at_rule {
            Some(at_rule) => ScanState::InAtRuleBlock(at_rule),
            None => ScanState::Normal,
        }
    }

    /// Classifies one line (without its line terminator) and returns the
    /// state for the next line. Rules are checked in a fixed order and the
    /// first one that matches wins.
    pub fn classify(self, line: &str) -> (LineKind, ScanState) {
        let trimmed = line.trim();

        if LITERAL_PREFIXES
            .iter()
            .any(|literal| trimmed.starts_with(literal))
        {
            return (LineKind::Literal, self);
        }

        let at_rule = self.at_rule();
        let in_comment = matches!(self, ScanState::InComment { .. }) || trimmed.contains("/*");

        // A closer wins over an opener on the same line.
        if trimmed.contains("*/") {
            return (LineKind::CommentClose, Self::outside_comment(at_rule));
        }
        if in_comment {
            return (LineKind::Comment, ScanState::InComment { resume: at_rule });
        }

        if trimmed.contains("@media") {
            return (
                LineKind::AtRuleOpen(AtRule::Media),
                ScanState::InAtRuleBlock(AtRule::Media),
            );
        }
        if trimmed.contains("@keyframes") {
            return (
                LineKind::AtRuleOpen(AtRule::Keyframes),
                ScanState::InAtRuleBlock(AtRule::Keyframes),
            );
        }

        if at_rule.is_some() {
            if closes_at_rule_block(line) {
                return (LineKind::AtRuleClose, ScanState::Normal);
            }
            return (LineKind::InAtRule, self);
        }

        if trimmed.contains('{') && !trimmed.starts_with('@') {
            (LineKind::Selector, self)
        } else {
            (LineKind::Other, self)
        }
    }
}

/// A line ends an at-rule block when it is exactly `}` once trimmed and
/// nothing before that brace is a `{` or `;`. Nested blocks are not counted,
/// so the first bare `}` in the body ends the block.
fn closes_at_rule_block(line: &str) -> bool {
    if line.trim() != "}" {
        return false;
    }
    let before = line.find('}').map_or("", |idx| &line[..idx]);
    !before.contains(['{', ';'])
}
