use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given
/// parser
///
/// The first match is required; after it, repetition continues until the
/// first failure, with the same zero-width termination rule as `Many`.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];
        if cursor.position() == start {
            return Ok((results, cursor));
        }

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    let stalled = next.position() == cursor.position();
                    results.push(value);
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}
