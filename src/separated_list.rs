use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses one required item, then zero or more `separator item` rounds.
/// Separator results are discarded. When a separator does not match, the
/// list ends *before* it (the cursor rolls back past the unmatched
/// separator). When a separator matches but the following item fails, that
/// failure is hard: a trailing separator is an error, not a graceful stop.
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `[1, 2, 3]`
/// - `"1,2,"` with separator `,` → error at the position after the last `,`
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];

        loop {
            let after_sep = match self.separator.parse(cursor) {
                Ok((_, next)) => next,
                Err(_) => break,
            };

            // an item is required after a matched separator
            let (value, next) = self.parser.parse(after_sep)?;
            results.push(value);
            let stalled = next.position() == cursor.position();
            cursor = next;
            if stalled {
                break;
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    SeparatedList::new(parser, separator)
}

/// Extension trait to add .sep_by() method support for parsers
pub trait SeparatedListExt<'code>: Parser<'code> + Sized {
    fn sep_by<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        PS: Parser<'code, Cursor = Self::Cursor>,
    {
        SeparatedList::new(self, separator)
    }
}

/// Implement SeparatedListExt for all parsers
impl<'code, P> SeparatedListExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::is_char;
    use crate::literal::literal;
    use crate::parser::ParseText;
    use crate::pattern::pattern;

    fn integer() -> crate::pattern::Pattern {
        pattern(r"[1-9][0-9]*").unwrap()
    }

    #[test]
    fn test_empty_input_fails() {
        let parser = integer().sep_by(is_char(','));
        assert!(parser.parse_text("").is_err());
    }

    #[test]
    fn test_single_element() {
        let parser = integer().sep_by(is_char(','));
        let (results, _) = parser.parse_text("42").unwrap();
        assert_eq!(results, vec!["42"]);
    }

    #[test]
    fn test_multiple_elements() {
        let parser = integer().sep_by(is_char(','));
        let (results, cursor) = parser.parse_text("1,2,3").unwrap();
        assert_eq!(results, vec!["1", "2", "3"]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_separator_with_whitespace() {
        let parser = integer().sep_by(literal(", "));
        let (results, cursor) = parser.parse_text("12, 15, 21").unwrap();
        assert_eq!(results, vec!["12", "15", "21"]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_trailing_separator_is_hard_failure() {
        // the failure is exactly the item's own failure at the position
        // after the trailing separator
        let parser = integer().sep_by(literal(", "));
        let listed = parser.parse_text("12, 15, ").unwrap_err();
        let standalone = integer().parse_text_at("12, 15, ", 8).unwrap_err();
        assert_eq!(listed, standalone);
        assert_eq!(listed.span().start, 8);
    }

    #[test]
    fn test_stops_before_unmatched_separator() {
        let parser = integer().sep_by(is_char(','));
        let (results, cursor) = parser.parse_text("1;2").unwrap();
        assert_eq!(results, vec!["1"]);
        assert_eq!(cursor.value(), Some(';'));
    }

    #[test]
    fn test_remaining_content_untouched() {
        let parser = integer().sep_by(is_char(','));
        let (results, cursor) = parser.parse_text("1,2,3 extra").unwrap();
        assert_eq!(results, vec!["1", "2", "3"]);
        assert_eq!(cursor.value(), Some(' '));
    }

    #[test]
    fn test_zero_width_round_terminates() {
        // both item and separator can match empty; the list must not spin
        let parser = literal("").sep_by(literal(""));
        let (results, cursor) = parser.parse_text("abc").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_first_item_failure_propagates() {
        let parser = integer().sep_by(is_char(','));
        let listed = parser.parse_text("x").unwrap_err();
        let standalone = integer().parse_text("x").unwrap_err();
        assert_eq!(listed, standalone);
    }
}
