use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use regex::Regex;

/// Parser that matches a regular expression anchored at the current position
///
/// The pattern must match starting exactly at the cursor; a match further
/// into the input is treated as a failure, never silently skipped to.
/// Because anchoring is positional, patterns do not need `^` or `\A`
/// prefixes (a leading `^` would restrict matches to offset zero).
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, ParseError> {
        match Regex::new(pattern) {
            Ok(regex) => Ok(Pattern { regex }),
            Err(error) => Err(ParseError::BadPattern {
                pattern: pattern.to_string(),
                reason: error.to_string(),
            }),
        }
    }

    /// Build a parser around an already-compiled regex
    pub fn from_compiled(regex: Regex) -> Self {
        Pattern { regex }
    }

    /// The pattern this parser matches
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(pattern: &str) -> Result<Pattern, ParseError> {
    Pattern::new(pattern)
}

impl<'code> Parser<'code> for Pattern {
    type Cursor = TextCursor<'code>;
    type Output = &'code str;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let pos = cursor.position();
        let source = cursor.source();

        let found = if pos <= source.len() {
            self.regex.find_at(source, pos)
        } else {
            None
        };
        if let Some(found) = found {
            if found.start() == pos {
                let matched = &source[pos..found.end()];
                return Ok((matched, cursor.advance(found.end() - pos)));
            }
        }
        Err(ParseError::Mismatch {
            message: format!("couldn't match the pattern: {}", self.regex.as_str()),
            span: Span::empty(pos),
            parser: format!("pattern({})", self.regex.as_str()).into(),
        })
    }
}
