use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use crate::tree::SyntaxNode;

/// Node-producing combinator for lists of items separated by a parser
///
/// The produced branch holds only the item nodes; separator results are
/// matched and discarded outright. An unmatched separator ends the list
/// cleanly, but a matched separator followed by a failing item is a hard
/// failure: a trailing separator is an error, not a graceful stop.
pub struct Separated<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> Separated<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        Separated { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for Separated<P, PS>
where
    P: Parser<'code, Output = SyntaxNode<'code>>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let (first, mut cursor) = self.parser.parse(cursor)?;
        let mut children = vec![first];

        loop {
            let after_sep = match self.separator.parse(cursor) {
                Ok((_, next)) => next,
                Err(_) => break,
            };

            let (node, next) = self.parser.parse(after_sep)?;
            children.push(node);
            let stalled = next.position() == cursor.position();
            cursor = next;
            if stalled {
                break;
            }
        }

        let span = Span::new(start, cursor.position());
        Ok((SyntaxNode::branch("list", span, children), cursor))
    }
}

/// Convenience function to create a Separated parser
pub fn separated<'code, P, PS>(parser: P, separator: PS) -> Separated<P, PS>
where
    P: Parser<'code, Output = SyntaxNode<'code>>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    Separated::new(parser, separator)
}
