use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that lets a handler turn a failure into a success
///
/// On failure the handler inspects the error and either produces a
/// replacement value, yielding a success that consumes no input, or
/// returns the (possibly rewritten) failure. This is the sole recovery
/// point in the model; everything else only propagates or backtracks.
pub struct Recover<P, F> {
    parser: P,
    handler: F,
}

impl<P, F> Recover<P, F> {
    pub fn new(parser: P, handler: F) -> Self {
        Recover { parser, handler }
    }
}

impl<'code, P, F> Parser<'code> for Recover<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> Result<P::Output, ParseError>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        match self.parser.parse(cursor) {
            Ok(ok) => Ok(ok),
            Err(error) => (self.handler)(error).map(|value| (value, cursor)),
        }
    }
}

/// Convenience function to create a Recover parser
pub fn recover<'code, P, F>(parser: P, handler: F) -> Recover<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> Result<P::Output, ParseError>,
{
    Recover::new(parser, handler)
}

/// Extension trait to add .recover() method support for parsers
pub trait RecoverExt<'code>: Parser<'code> + Sized {
    fn recover<F>(self, handler: F) -> Recover<Self, F>
    where
        F: Fn(ParseError) -> Result<Self::Output, ParseError>,
    {
        Recover::new(self, handler)
    }
}

/// Implement RecoverExt for all parsers
impl<'code, P> RecoverExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::is_char;
    use crate::cursor::Cursor;
    use crate::map::MapExt;
    use crate::parser::ParseText;
    use crate::pattern::pattern;

    #[test]
    fn test_recover_produces_default_value() {
        let parser = pattern(r"[0-9]+")
            .unwrap()
            .map(|digits: &str| digits.parse::<i64>().unwrap_or_default())
            .recover(|_| Ok(0));

        let (number, cursor) = parser.parse_text("xyz").unwrap();
        assert_eq!(number, 0);
        // recovery consumes nothing
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_recover_preserves_success() {
        let parser = is_char('a').recover(|_| Ok('?'));
        let (c, cursor) = parser.parse_text("ab").unwrap();
        assert_eq!(c, 'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_recover_may_keep_failing() {
        let parser = is_char('a').recover(|error| Err(error));
        let recovered = parser.parse_text("b").unwrap_err();
        let plain = is_char('a').parse_text("b").unwrap_err();
        assert_eq!(recovered, plain);
    }

    #[test]
    fn test_recover_selectively() {
        // only recover failures that happened at the very start
        let parser = is_char('a').recover(|error| {
            if error.span().start == 0 {
                Ok('-')
            } else {
                Err(error)
            }
        });

        let (c, _) = parser.parse_text("b").unwrap();
        assert_eq!(c, '-');
        assert!(parser.parse_text_at("xb", 1).is_err());
    }

    #[test]
    fn test_recover_function_syntax() {
        let parser = recover(is_char('a'), |_| Ok('!'));
        let (c, _) = parser.parse_text("z").unwrap();
        assert_eq!(c, '!');
    }
}
