use crate::cursor::Cursor;
use crate::lexer::Token;

/// A cursor over a tokenized input
///
/// Positions are indices into the token slice, not byte offsets; the
/// tokens themselves carry their source spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCursor<'code> {
    tokens: &'code [Token<'code>],
    position: usize,
}

impl<'code> TokenCursor<'code> {
    /// A cursor at the start of `tokens`
    pub fn new(tokens: &'code [Token<'code>]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    /// A cursor at `position`, clamped to the end of `tokens`
    pub fn at(tokens: &'code [Token<'code>], position: usize) -> Self {
        TokenCursor {
            tokens,
            position: position.min(tokens.len()),
        }
    }

    /// The whole token sequence
    pub fn source(&self) -> &'code [Token<'code>] {
        self.tokens
    }

    /// Source byte offset just past the last token, for reporting failures
    /// at the end of the token stream
    pub fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, |token| token.span.end)
    }
}

impl<'code> Cursor<'code> for TokenCursor<'code> {
    type Element = Token<'code>;

    fn value(&self) -> Option<Token<'code>> {
        self.tokens.get(self.position).copied()
    }

    fn next(self) -> Self {
        TokenCursor {
            tokens: self.tokens,
            position: (self.position + 1).min(self.tokens.len()),
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn in_bound_at(&self, offset: usize) -> bool {
        offset < self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn tokens() -> Vec<Token<'static>> {
        vec![
            Token {
                kind: "word",
                text: "hi",
                span: Span::new(0, 2),
            },
            Token {
                kind: "number",
                text: "42",
                span: Span::new(3, 5),
            },
        ]
    }

    #[test]
    fn test_basic_operations() {
        let tokens = tokens();
        let cursor = TokenCursor::new(&tokens);

        let token = cursor.value().unwrap();
        assert_eq!(token.kind, "word");
        assert_eq!(token.text, "hi");

        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap().kind, "number");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_eos() {
        let tokens = tokens();
        let cursor = TokenCursor::new(&tokens).next().next();
        assert!(cursor.eos());
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.position(), 2);

        let cursor = cursor.next();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_sequence() {
        let cursor = TokenCursor::new(&[]);
        assert!(cursor.eos());
        assert_eq!(cursor.end_offset(), 0);
    }

    #[test]
    fn test_end_offset() {
        let tokens = tokens();
        let cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.end_offset(), 5);
    }

    #[test]
    fn test_copy_independence() {
        let tokens = tokens();
        let cursor = TokenCursor::new(&tokens);
        let saved = cursor;

        let advanced = cursor.next();
        assert_eq!(advanced.position(), 1);
        assert_eq!(saved.position(), 0);
    }
}
