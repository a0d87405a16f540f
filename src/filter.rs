//! Exclusion filtering with shell-style glob patterns.

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::error::{ByteMapError, Result};

/// Match options shared by glob expansion and exclusion checks.
///
/// `*` and `?` never match a path separator, so `dir/*` does not reach
/// into `dir/sub/file`.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Rewrite a shell-style pattern into the dialect the `glob` crate parses.
///
/// - A run of `*` is a single `*`; there is no recursive `**`.
/// - `[^...]` negates a class and becomes `[!...]`.
/// - A leading `!` in a class is a literal member, so it is moved out of
///   the leading position.
///
/// An unclosed `[` is passed through untouched so compilation reports it.
pub fn to_glob_dialect(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                out.push('*');
            }
            '[' => {
                let negated = chars.next_if_eq(&'^').is_some();
                let mut body = String::new();
                // A `]` right after the opening bracket is a member.
                if let Some(first) = chars.next_if_eq(&']') {
                    body.push(first);
                }
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }

                if !closed {
                    out.push('[');
                    if negated {
                        out.push('^');
                    }
                    out.push_str(&body);
                } else if negated {
                    out.push_str("[!");
                    out.push_str(&body);
                    out.push(']');
                } else if let Some(rest) = body.strip_prefix('!') {
                    if rest.is_empty() {
                        out.push('!');
                    } else {
                        out.push('[');
                        match rest.strip_suffix('-') {
                            Some(head) => {
                                out.push_str(head);
                                out.push_str("!-");
                            }
                            None => {
                                out.push_str(rest);
                                out.push('!');
                            }
                        }
                        out.push(']');
                    }
                } else {
                    out.push('[');
                    out.push_str(&body);
                    out.push(']');
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Compile a single glob pattern, tagging failures with the offending text.
pub fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(&to_glob_dialect(pattern)).map_err(|source| ByteMapError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// An ordered set of exclusion patterns, compiled once up front.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Pattern>,
}

impl ExcludeFilter {
    /// Compile `patterns` in order. The first malformed pattern aborts.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| compile(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if `path` matches any pattern. Stops at the first match.
    pub fn is_excluded(&self, path: &Path) -> bool {
        match self
            .patterns
            .iter()
            .find(|p| p.matches_path_with(path, MATCH_OPTIONS))
        {
            Some(pattern) => {
                log::debug!("Excluding {:?} (matched '{}')", path, pattern.as_str());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
