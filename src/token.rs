use crate::cursor::Cursor;
use crate::cursors::TokenCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;

/// Parser that consumes one token from a token sequence, matching on kind
/// and optionally on exact text
///
/// This is the token-level sibling of the text atomics: grammars over a
/// [`Lexer`](crate::lexer::Lexer)'s output compose it with the same
/// combinators. The output is the matched token's text; failure spans
/// refer to source byte offsets carried by the tokens.
#[derive(Debug, Clone, Copy)]
pub struct IsToken {
    kind: &'static str,
    text: Option<&'static str>,
}

impl IsToken {
    pub fn new(kind: &'static str, text: Option<&'static str>) -> Self {
        IsToken { kind, text }
    }

    fn label(&self) -> String {
        match self.text {
            Some(text) => format!("tok({}, '{}')", self.kind, text),
            None => format!("tok({})", self.kind),
        }
    }
}

/// Convenience function to match one token by kind
pub fn is_token(kind: &'static str) -> IsToken {
    IsToken::new(kind, None)
}

/// Convenience function to match one token by kind and exact text
pub fn is_token_text(kind: &'static str, text: &'static str) -> IsToken {
    IsToken::new(kind, Some(text))
}

impl<'code> Parser<'code> for IsToken {
    type Cursor = TokenCursor<'code>;
    type Output = &'code str;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        match cursor.value() {
            Some(token)
                if token.kind == self.kind
                    && self.text.is_none_or(|text| text == token.text) =>
            {
                Ok((token.text, cursor.next()))
            }
            Some(token) => Err(ParseError::Mismatch {
                message: format!(
                    "expected token {} but got {} '{}'",
                    self.kind, token.kind, token.text
                ),
                span: token.span,
                parser: self.label().into(),
            }),
            None => Err(ParseError::Mismatch {
                message: format!("expected token {} but got EOF", self.kind),
                span: Span::empty(cursor.end_offset()),
                parser: self.label().into(),
            }),
        }
    }
}
