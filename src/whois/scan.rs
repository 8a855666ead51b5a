//! Classification of WHOIS response lines.

//------------ Line ----------------------------------------------------------

/// A classified line of a WHOIS response.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    /// An error reported by the registry, e.g., `%ERROR:101: no entries`.
    Error {
        /// The numeric error code.
        code: u32,

        /// The trimmed error message.
        message: &'a str,
    },

    /// A comment line starting with `%`.
    Comment,

    /// An attribute line.
    Attribute {
        /// The attribute name.
        name: &'a str,

        /// The value, with leading whitespace removed.
        value: &'a str,
    },

    /// An attribute line without a usable value.
    ///
    /// The value was either empty or started with `#`, as is the case with
    /// attributes the registry filters from its responses.
    Filtered {
        /// The attribute name.
        name: &'a str,
    },

    /// An empty line or one consisting of whitespace only.
    Blank,

    /// Any other line.
    Other,
}

impl<'a> Line<'a> {
    /// Classifies a single line.
    ///
    /// The line must not contain a line break. Error markers are recognized
    /// before anything else, so an error hidden in a comment is still an
    /// error.
    pub fn classify(line: &'a str) -> Self {
        if let Some(res) = Self::error(line) {
            return res;
        }
        if line.starts_with('%') {
            return Line::Comment;
        }
        if line.trim().is_empty() {
            return Line::Blank;
        }
        Self::attribute(line).unwrap_or(Line::Other)
    }

    /// Matches `[%#\s]*ERROR:<digits>:<message>`.
    ///
    /// Codes too large for a `u32` are reported as `u32::MAX`.
    fn error(line: &'a str) -> Option<Self> {
        let rest = line
            .trim_start_matches(|ch: char| ch == '%' || ch == '#' || ch.is_whitespace());
        let rest = rest.strip_prefix("ERROR:")?;
        let (code, rest) = split_while(rest, |ch| ch.is_ascii_digit());
        let message = rest.strip_prefix(':')?;
        if code.is_empty() || message.is_empty() {
            return None;
        }
        Some(Line::Error {
            code: code.parse().unwrap_or(u32::MAX),
            message: message.trim(),
        })
    }

    /// Matches `\s*<name>\s*:\s*<value>` with a name made of `[a-z0-9-]`.
    fn attribute(line: &'a str) -> Option<Self> {
        let (name, rest) = split_while(line.trim_start(), |ch| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
        });
        if name.is_empty() {
            return None;
        }
        let value = rest.trim_start().strip_prefix(':')?.trim_start();
        if value.is_empty() || value.starts_with('#') {
            Some(Line::Filtered { name })
        } else {
            Some(Line::Attribute { name, value })
        }
    }
}

/// Splits a string after the longest prefix of characters matching `op`.
fn split_while(s: &str, op: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|ch: char| !op(ch)).unwrap_or(s.len());
    s.split_at(end)
}

//============ Testing =======================================================
