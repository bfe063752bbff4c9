use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;

/// Parser that matches an exact string at the current position
///
/// Matching is byte-for-byte; on success the output is the matched slice
/// of the *source*, so it lives as long as the input does.
#[derive(Debug, Clone)]
pub struct Literal {
    literal: String,
}

impl Literal {
    pub fn new(literal: impl Into<String>) -> Self {
        Literal {
            literal: literal.into(),
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(s: impl Into<String>) -> Literal {
    Literal::new(s)
}

impl<'code> Parser<'code> for Literal {
    type Cursor = TextCursor<'code>;
    type Output = &'code str;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let pos = cursor.position();
        let rest = cursor.rest();

        if rest.starts_with(self.literal.as_str()) {
            let matched = &rest[..self.literal.len()];
            return Ok((matched, cursor.advance(self.literal.len())));
        }

        let span = Span::new(pos, pos + self.literal.len());
        let message = if rest.len() < self.literal.len() {
            format!("tried to match '{}' but got EOF", self.literal)
        } else {
            // take a char-boundary-safe prefix of comparable length
            let got: String = rest.chars().take(self.literal.chars().count()).collect();
            format!("tried to match '{}' but got '{}'", self.literal, got)
        };
        Err(ParseError::Mismatch {
            message,
            span,
            parser: format!("lit('{}')", self.literal).into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseText;

    #[test]
    fn test_literal_match() {
        let (matched, cursor) = literal("hello").parse_text("hello world").unwrap();
        assert_eq!(matched, "hello");
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.value(), Some(' '));
    }

    #[test]
    fn test_literal_match_entire_input() {
        let (matched, cursor) = literal("abc").parse_text("abc").unwrap();
        assert_eq!(matched, "abc");
        assert!(cursor.eos());
    }

    #[test]
    fn test_literal_mismatch() {
        let error = literal("hello").parse_text("help me").unwrap_err();
        assert_eq!(error.span(), Span::new(0, 5));
        assert!(error.to_string().contains("tried to match 'hello'"));
        assert!(error.to_string().contains("help "));
    }

    #[test]
    fn test_literal_eof() {
        let error = literal("hello").parse_text("hel").unwrap_err();
        assert_eq!(error.span(), Span::new(0, 5));
        assert!(error.to_string().contains("EOF"));
    }

    #[test]
    fn test_literal_failure_span_at_offset() {
        let error = literal("abc").parse_text_at("xx~~~", 2).unwrap_err();
        assert_eq!(error.span(), Span::new(2, 5));
    }

    #[test]
    fn test_literal_out_of_bounds_offset() {
        let error = literal("abc").parse_text_at("ab", 9).unwrap_err();
        assert_eq!(error.span(), Span::new(9, 12));
        assert!(error.to_string().contains("EOF"));
    }

    #[test]
    fn test_literal_at_offset() {
        let (matched, cursor) = literal("world").parse_text_at("hello world", 6).unwrap();
        assert_eq!(matched, "world");
        assert!(cursor.eos());
    }

    #[test]
    fn test_literal_mismatch_with_multibyte_input() {
        // the reported "got" prefix must respect character boundaries
        let error = literal("abcd").parse_text("äääää").unwrap_err();
        assert!(error.to_string().contains("ääää"));
    }

    #[test]
    fn test_literal_empty_matches_anywhere() {
        let (matched, cursor) = literal("").parse_text("xyz").unwrap();
        assert_eq!(matched, "");
        assert_eq!(cursor.position(), 0);
    }
}
