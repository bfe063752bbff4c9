use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::tree::SyntaxNode;

/// Node-producing combinator that drops the left result and keeps the
/// right node, widening its span back to the sequence's start
///
/// The widened span is what distinguishes this from the typed
/// [`keep_right`](crate::keep_right): position information on the kept
/// node reflects the whole matched region even though only the tail value
/// survives.
pub struct KeepRight<L, R> {
    left: L,
    right: R,
}

impl<L, R> KeepRight<L, R> {
    pub fn new(left: L, right: R) -> Self {
        KeepRight { left, right }
    }
}

impl<'code, L, R> Parser<'code> for KeepRight<L, R>
where
    L: Parser<'code>,
    R: Parser<'code, Cursor = L::Cursor, Output = SyntaxNode<'code>>,
{
    type Cursor = L::Cursor;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let (_, cursor) = self.left.parse(cursor)?;
        let (mut node, cursor) = self.right.parse(cursor)?;
        node.span.start = start;
        Ok((node, cursor))
    }
}

/// Node-producing combinator that keeps the left node and drops the right
/// result, widening the kept node's span to the sequence's end
pub struct KeepLeft<L, R> {
    left: L,
    right: R,
}

impl<L, R> KeepLeft<L, R> {
    pub fn new(left: L, right: R) -> Self {
        KeepLeft { left, right }
    }
}

impl<'code, L, R> Parser<'code> for KeepLeft<L, R>
where
    L: Parser<'code, Output = SyntaxNode<'code>>,
    R: Parser<'code, Cursor = L::Cursor>,
{
    type Cursor = L::Cursor;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (mut node, cursor) = self.left.parse(cursor)?;
        let (_, cursor) = self.right.parse(cursor)?;
        node.span.end = cursor.position();
        Ok((node, cursor))
    }
}

/// Convenience function to create a node-keeping KeepRight parser
pub fn keep_right<'code, L, R>(left: L, right: R) -> KeepRight<L, R>
where
    L: Parser<'code>,
    R: Parser<'code, Cursor = L::Cursor, Output = SyntaxNode<'code>>,
{
    KeepRight::new(left, right)
}

/// Convenience function to create a node-keeping KeepLeft parser
pub fn keep_left<'code, L, R>(left: L, right: R) -> KeepLeft<L, R>
where
    L: Parser<'code, Output = SyntaxNode<'code>>,
    R: Parser<'code, Cursor = L::Cursor>,
{
    KeepLeft::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::is_char;
    use crate::parser::ParseText;
    use crate::pattern::pattern;
    use crate::span::Span;
    use crate::tree::NodeExt;

    #[test]
    fn test_keep_right_widens_start() {
        let parser = keep_right(is_char('['), pattern(r"[0-9]+").unwrap().node("int"));
        let (node, cursor) = parser.parse_text("[42").unwrap();

        assert_eq!(node.kind, "int");
        assert_eq!(node.value, Some("42"));
        assert_eq!(node.span, Span::new(0, 3));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_keep_left_widens_end() {
        let parser = keep_left(pattern(r"[0-9]+").unwrap().node("int"), is_char(']'));
        let (node, cursor) = parser.parse_text("42]").unwrap();

        assert_eq!(node.kind, "int");
        assert_eq!(node.value, Some("42"));
        assert_eq!(node.span, Span::new(0, 3));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_nested_keeps_cover_all_delimiters() {
        // [ 42 ] with both delimiters dropped; the node spans everything
        let parser = keep_right(
            is_char('['),
            keep_left(pattern(r"[0-9]+").unwrap().node("int"), is_char(']')),
        );
        let (node, _) = parser.parse_text("[42]").unwrap();
        assert_eq!(node.span, Span::new(0, 4));
        assert_eq!(node.value, Some("42"));
    }

    #[test]
    fn test_keep_right_left_failure() {
        let parser = keep_right(is_char('['), pattern(r"[0-9]+").unwrap().node("int"));
        let error = parser.parse_text("42").unwrap_err();
        assert_eq!(error.span().start, 0);
    }

    #[test]
    fn test_keep_left_right_failure_propagates() {
        let parser = keep_left(pattern(r"[0-9]+").unwrap().node("int"), is_char(']'));
        let error = parser.parse_text("42)").unwrap_err();
        assert_eq!(error.span().start, 2);
    }
}
