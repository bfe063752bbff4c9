use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that rewrites the failure of a parser
///
/// Successes pass through untouched; a failure is piped through the
/// mapper, which typically replaces a low-level diagnostic with one that
/// names the construct being parsed. To turn a failure back into a
/// success, see [`recover`](crate::recover).
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<'code, P, F> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError) -> ParseError,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}
