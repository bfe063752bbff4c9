use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::fmt;

/// A half-open `[start, end)` range of consumed input.
///
/// Positions are byte offsets for text cursors and token indices for token
/// cursors; a span never borrows the source, so it stays `Copy` and can be
/// stored in results and errors alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// A zero-width span at the given position
    pub fn empty(at: usize) -> Self {
        Span { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The region of `source` this span covers.
    ///
    /// Failure spans may reach past the end of the input (an atomic matcher
    /// reports the region it *tried* to consume), so out-of-range spans
    /// yield an empty slice rather than panicking.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }

    /// The smallest span covering both `self` and `other`
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}

/// Parser combinator that pairs a parser's output with the span it consumed
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, Span);

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let (value, next) = self.parser.parse(cursor)?;
        let span = Span::new(start, next.position());
        Ok(((value, span), next))
    }
}

/// Extension trait to add .with_span() method support for parsers
pub trait SpanExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser so its output carries the consumed span
    fn with_span(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpanExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned parser
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}
