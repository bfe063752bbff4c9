use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use crate::tree::{BoxedNodeParser, SyntaxNode};

/// Node-producing combinator that runs its children in order and
/// aggregates their nodes into one branch
///
/// The sequence is n-ary: `.also()` appends to the same node rather than
/// nesting, so a multi-step sequence produces one flat list of children.
/// Ignored children are dropped at aggregation. The branch spans from the
/// first child's start to the last child's end.
///
/// The first failing child's failure propagates unchanged; an enclosing
/// choice, if any, performs the rollback.
pub struct Sequence<'code> {
    parsers: Vec<BoxedNodeParser<'code>>,
}

impl<'code> Sequence<'code> {
    pub fn new() -> Self {
        Sequence {
            parsers: Vec::new(),
        }
    }

    /// Append one more step to this sequence
    pub fn also(
        mut self,
        parser: impl Parser<'code, Cursor = TextCursor<'code>, Output = SyntaxNode<'code>> + 'code,
    ) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }
}

impl<'code> Default for Sequence<'code> {
    fn default() -> Self {
        Sequence::new()
    }
}

/// Convenience function to create a Sequence from already-boxed parsers
pub fn sequence<'code>(parsers: Vec<BoxedNodeParser<'code>>) -> Sequence<'code> {
    Sequence { parsers }
}

impl<'code> Parser<'code> for Sequence<'code> {
    type Cursor = TextCursor<'code>;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let mut children = Vec::with_capacity(self.parsers.len());
        let mut cursor = cursor;

        for parser in &self.parsers {
            let (node, next) = parser.parse(cursor)?;
            children.push(node);
            cursor = next;
        }

        let span = Span::new(start, cursor.position());
        Ok((SyntaxNode::branch("sequence", span, children), cursor))
    }
}
