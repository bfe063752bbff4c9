use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;

/// Parser that consumes and returns any single character
pub struct AnyChar;

impl AnyChar {
    pub fn new() -> Self {
        AnyChar
    }
}

impl Default for AnyChar {
    fn default() -> Self {
        AnyChar::new()
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar::new()
}

impl<'code> Parser<'code> for AnyChar {
    type Cursor = TextCursor<'code>;
    type Output = char;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        match cursor.value() {
            Some(c) => Ok((c, cursor.next())),
            None => {
                let pos = cursor.position();
                Err(ParseError::Mismatch {
                    message: "expected a character but got EOF".to_string(),
                    span: Span::new(pos, pos + 1),
                    parser: "any_char()".into(),
                })
            }
        }
    }
}

/// Parser that matches one exact character
#[derive(Debug, Clone, Copy)]
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

/// Convenience function to create an IsChar parser
pub fn is_char(expected: char) -> IsChar {
    IsChar::new(expected)
}

impl<'code> Parser<'code> for IsChar {
    type Cursor = TextCursor<'code>;
    type Output = char;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        match cursor.value() {
            Some(c) if c == self.expected => Ok((c, cursor.next())),
            got => {
                let pos = cursor.position();
                let got = got.map_or("EOF".to_string(), |c| c.to_string());
                Err(ParseError::Mismatch {
                    message: format!("expected '{}' but got '{}'", self.expected, got),
                    span: Span::new(pos, pos + self.expected.len_utf8()),
                    parser: format!("char('{}')", self.expected).into(),
                })
            }
        }
    }
}
