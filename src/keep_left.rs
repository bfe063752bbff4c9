use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and keeps only the first
/// value
///
/// Both parsers must succeed; the returned cursor sits after the second
/// match, so the consumed region covers the whole sequence.
pub struct KeepLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> KeepLeft<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        KeepLeft { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (value, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a KeepLeft parser
pub fn keep_left<'code, P1, P2>(parser1: P1, parser2: P2) -> KeepLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    KeepLeft::new(parser1, parser2)
}

/// Extension trait to add .keep_left() method support for parsers
pub trait KeepLeftExt<'code>: Parser<'code> + Sized {
    /// Sequence `other` after this parser, keeping only this parser's value
    fn keep_left<P>(self, other: P) -> KeepLeft<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        KeepLeft::new(self, other)
    }
}

/// Implement KeepLeftExt for all parsers
impl<'code, P> KeepLeftExt<'code> for P where P: Parser<'code> {}
