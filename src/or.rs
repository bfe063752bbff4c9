use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;

/// Parser combinator that tries the first parser, and if it fails, tries
/// the second parser at the same position
///
/// Choice is left-biased: the first succeeding alternative wins, even if a
/// later one would also match. A failing alternative leaves no trace; the
/// next one starts from the saved cursor.
///
/// When every alternative fails, the result is a
/// [`ParseError::NoChoiceMatched`] at the choice's start position that also
/// carries the branch failure which progressed furthest into the input.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let first = match self.parser1.parse(cursor) {
            Ok(ok) => return Ok(ok),
            Err(error) => error,
        };
        match self.parser2.parse(cursor) {
            Ok(ok) => Ok(ok),
            Err(second) => Err(ParseError::NoChoiceMatched {
                span: Span::empty(start),
                furthest: Some(Box::new(first.into_deepest().further(second.into_deepest()))),
            }),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
