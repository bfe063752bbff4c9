use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, `content`, `close` in order and returns just the content
/// value; the delimiters are matched and dropped. The returned cursor sits
/// after the closing delimiter.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Creates a parser that matches content between opening and closing
/// delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    Between::new(open, content, close)
}

/// Creates a parser that matches content surrounded by the same delimiter
/// on both sides
pub fn inside<'code, S, P>(surround: S, content: P) -> Between<S, P, S>
where
    S: Parser<'code> + Clone,
    P: Parser<'code, Cursor = S::Cursor>,
{
    Between::new(surround.clone(), content, surround)
}
