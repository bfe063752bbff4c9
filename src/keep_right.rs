use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and keeps only the second
/// value
///
/// Both parsers must succeed; the consumed region still covers the whole
/// sequence (the returned cursor sits after the second match), only the
/// first value is dropped.
pub struct KeepRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> KeepRight<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        KeepRight { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Convenience function to create a KeepRight parser
pub fn keep_right<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    KeepRight::new(parser1, parser2)
}

/// Extension trait to add .keep_right() method support for parsers
pub trait KeepRightExt<'code>: Parser<'code> + Sized {
    /// Sequence `other` after this parser, keeping only `other`'s value
    fn keep_right<P>(self, other: P) -> KeepRight<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        KeepRight::new(self, other)
    }
}

/// Implement KeepRightExt for all parsers
impl<'code, P> KeepRightExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::is_char;
    use crate::cursor::Cursor;
    use crate::parser::ParseText;
    use crate::pattern::pattern;
    use crate::span::{Span, SpanExt};

    #[test]
    fn test_keep_right_returns_second_value() {
        let parser = is_char('[').keep_right(pattern(r"[0-9]+").unwrap());
        let (digits, cursor) = parser.parse_text("[42").unwrap();
        assert_eq!(digits, "42");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_keep_right_span_covers_whole_sequence() {
        let parser = is_char('[')
            .keep_right(pattern(r"[0-9]+").unwrap())
            .with_span();
        let ((digits, span), _) = parser.parse_text("[42").unwrap();
        assert_eq!(digits, "42");
        assert_eq!(span, Span::new(0, 3));
    }

    #[test]
    fn test_keep_right_first_fails() {
        let parser = is_char('[').keep_right(is_char('x'));
        let error = parser.parse_text("x").unwrap_err();
        assert_eq!(error.span(), Span::new(0, 1));
    }

    #[test]
    fn test_keep_right_second_failure_propagates_unchanged() {
        let parser = is_char('[').keep_right(is_char('x'));
        let sequenced = parser.parse_text("[y").unwrap_err();
        let standalone = is_char('x').parse_text_at("[y", 1).unwrap_err();
        assert_eq!(sequenced, standalone);
    }

    #[test]
    fn test_keep_right_chain() {
        let parser = is_char('a').keep_right(is_char('b')).keep_right(is_char('c'));
        let (c, cursor) = parser.parse_text("abc").unwrap();
        assert_eq!(c, 'c');
        assert!(cursor.eos());
    }

    #[test]
    fn test_keep_right_function_syntax() {
        let parser = keep_right(is_char('#'), is_char('x'));
        let (x, _) = parser.parse_text("#x").unwrap();
        assert_eq!(x, 'x');
    }
}
