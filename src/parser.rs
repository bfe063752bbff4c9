use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use std::rc::Rc;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// The cursor type this parser consumes input through
    type Cursor: Cursor<'code>;
    /// The value produced on success
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor past the consumed input on
    /// success, or a [`ParseError`] on failure. A failing parse must leave
    /// no visible side effects: the caller's copy of the cursor is still
    /// positioned at the attempt's start.
    fn parse(&self, cursor: Self::Cursor)
    -> Result<(Self::Output, Self::Cursor), ParseError>;
}

impl<'a, 'code, P> Parser<'code> for &'a P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        (**self).parse(cursor)
    }
}

/// Top-level invocation for text parsers
///
/// Wraps raw text in a fresh [`TextCursor`] and runs the parser tree once.
/// The outcome is returned as data either way; rendering a failure (e.g.
/// via [`ParseError::context`]) is the caller's decision.
pub trait ParseText<'code>: Parser<'code, Cursor = TextCursor<'code>> {
    fn parse_text(
        &self,
        text: &'code str,
    ) -> Result<(Self::Output, TextCursor<'code>), ParseError> {
        self.parse(TextCursor::new(text))
    }

    fn parse_text_at(
        &self,
        text: &'code str,
        offset: usize,
    ) -> Result<(Self::Output, TextCursor<'code>), ParseError> {
        self.parse(TextCursor::at(text, offset))
    }
}

impl<'code, P> ParseText<'code> for P where P: Parser<'code, Cursor = TextCursor<'code>> {}
