use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser
///
/// Never fails: the first child failure ends the repetition and the cursor
/// stays at the last successful match (or the original position for zero
/// matches). A successful child that consumes no input is kept and then
/// terminates the loop, so a zero-width child cannot spin forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let mut results = Vec::new();

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

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
