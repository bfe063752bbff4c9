use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use crate::tree::SyntaxNode;

/// Node-producing combinator that matches its child zero or more times
///
/// Never fails: the collected matches become the children of one branch
/// node ending at the last successful match, or an empty branch at the
/// original position for zero matches. A zero-width child match is kept
/// and ends the repetition, so the loop always terminates.
pub struct Repeat<P> {
    parser: P,
}

impl<P> Repeat<P> {
    pub fn new(parser: P) -> Self {
        Repeat { parser }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code, Output = SyntaxNode<'code>>,
{
    type Cursor = P::Cursor;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let mut children = Vec::new();
        let mut cursor = cursor;

        loop {
            match self.parser.parse(cursor) {
                Ok((node, next)) => {
                    let stalled = next.position() == cursor.position();
                    children.push(node);
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        let span = Span::new(start, cursor.position());
        Ok((SyntaxNode::branch("repeat", span, children), cursor))
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code, Output = SyntaxNode<'code>>,
{
    Repeat::new(parser)
}
