//! Combinators that build structured syntax trees instead of typed tuples
//!
//! Atomic matchers become leaf producers through [`NodeExt::node`]; the
//! [`sequence`], [`repeat`] and [`separated`] combinators aggregate child
//! nodes into branches, skipping children marked ignored; that is how
//! punctuation gets matched but dropped from the produced tree. The
//! [`keep`] combinators drop a neighbouring result while widening the kept
//! node's span to cover everything the sequence consumed.

pub mod keep;
pub mod repeat;
pub mod separated;
pub mod sequence;

pub use keep::{keep_left, keep_right};
pub use repeat::repeat;
pub use separated::separated;
pub use sequence::{Sequence, sequence};

use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

/// A node of a produced syntax tree
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode<'code> {
    /// Tag describing what this node represents
    pub kind: Cow<'static, str>,
    /// The input region the node covers
    pub span: Span,
    /// The matched text for leaf nodes
    pub value: Option<&'code str>,
    /// Child nodes in match order, ignored children already dropped
    pub children: Vec<SyntaxNode<'code>>,
    /// Excluded from parent aggregation when true
    pub ignored: bool,
}

impl<'code> SyntaxNode<'code> {
    /// A childless node carrying the matched text
    pub fn leaf(kind: impl Into<Cow<'static, str>>, span: Span, value: &'code str) -> Self {
        SyntaxNode {
            kind: kind.into(),
            span,
            value: Some(value),
            children: Vec::new(),
            ignored: false,
        }
    }

    /// An inner node aggregating `children`; ignored children are dropped
    pub fn branch(
        kind: impl Into<Cow<'static, str>>,
        span: Span,
        children: Vec<SyntaxNode<'code>>,
    ) -> Self {
        SyntaxNode {
            kind: kind.into(),
            span,
            value: None,
            children: children.into_iter().filter(|child| !child.ignored).collect(),
            ignored: false,
        }
    }

    pub fn child(&self, index: usize) -> &SyntaxNode<'code> {
        &self.children[index]
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<'code> Index<usize> for SyntaxNode<'code> {
    type Output = SyntaxNode<'code>;

    fn index(&self, index: usize) -> &SyntaxNode<'code> {
        &self.children[index]
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &SyntaxNode<'_>, level: usize) -> fmt::Result {
    let indent = " ".repeat(level);
    writeln!(f, "{}{{", indent)?;
    writeln!(f, "{}type : {},", indent, node.kind)?;
    writeln!(f, "{}start : {},", indent, node.span.start)?;
    writeln!(f, "{}end : {},", indent, node.span.end)?;
    if let Some(value) = node.value {
        writeln!(f, "{}data : {},", indent, value)?;
    }
    if !node.children.is_empty() {
        writeln!(f, "{}children :", indent)?;
        for child in &node.children {
            write_node(f, child, level + 4)?;
            writeln!(f, ",")?;
        }
    }
    write!(f, "{}}}", indent)
}

impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

/// A type-erased parser producing syntax nodes, for n-ary aggregation
pub type BoxedNodeParser<'code> =
    Box<dyn Parser<'code, Cursor = TextCursor<'code>, Output = SyntaxNode<'code>> + 'code>;

/// Parser adapter that turns any text parser into a leaf-node producer
///
/// The wrapped parser's own output is discarded; the leaf carries the
/// matched slice of the source instead.
pub struct Node<P> {
    parser: P,
    kind: Cow<'static, str>,
}

impl<P> Node<P> {
    pub fn new(parser: P, kind: impl Into<Cow<'static, str>>) -> Self {
        Node {
            parser,
            kind: kind.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Node<P>
where
    P: Parser<'code, Cursor = TextCursor<'code>>,
{
    type Cursor = TextCursor<'code>;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let start = cursor.position();
        let source = cursor.source();
        let (_, next) = self.parser.parse(cursor)?;
        let span = Span::new(start, next.position());
        Ok((
            SyntaxNode::leaf(self.kind.clone(), span, span.slice(source)),
            next,
        ))
    }
}

/// Extension trait to turn text parsers into leaf-node producers
pub trait NodeExt<'code>: Parser<'code, Cursor = TextCursor<'code>> + Sized {
    fn node(self, kind: impl Into<Cow<'static, str>>) -> Node<Self> {
        Node::new(self, kind)
    }
}

impl<'code, P> NodeExt<'code> for P where P: Parser<'code, Cursor = TextCursor<'code>> {}

/// Parser combinator that relabels the produced node's kind
pub struct Rename<P> {
    parser: P,
    kind: Cow<'static, str>,
}

impl<'code, P> Parser<'code> for Rename<P>
where
    P: Parser<'code, Output = SyntaxNode<'code>>,
{
    type Cursor = P::Cursor;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (mut node, cursor) = self.parser.parse(cursor)?;
        node.kind = self.kind.clone();
        Ok((node, cursor))
    }
}

/// Parser combinator that marks the produced node as excluded from parent
/// aggregation
pub struct Ignore<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Ignore<P>
where
    P: Parser<'code, Output = SyntaxNode<'code>>,
{
    type Cursor = P::Cursor;
    type Output = SyntaxNode<'code>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let (mut node, cursor) = self.parser.parse(cursor)?;
        node.ignored = true;
        Ok((node, cursor))
    }
}

/// Extension trait for parsers that produce syntax nodes
pub trait SyntaxNodeExt<'code>: Parser<'code, Output = SyntaxNode<'code>> + Sized {
    /// Relabel the produced node without altering what is matched
    fn rename(self, kind: impl Into<Cow<'static, str>>) -> Rename<Self> {
        Rename {
            parser: self,
            kind: kind.into(),
        }
    }

    /// Mark the produced node so parents drop it when aggregating
    fn ignore(self) -> Ignore<Self> {
        Ignore { parser: self }
    }

    /// Match `other` after this parser and drop its result, keeping this
    /// node with its span widened over both matches
    fn then<R>(self, other: R) -> keep::KeepLeft<Self, R>
    where
        R: Parser<'code, Cursor = Self::Cursor>,
    {
        keep::KeepLeft::new(self, other)
    }

    /// Match this parser between `left` and `right`, dropping both
    /// delimiters and widening the kept node's span over all three
    fn between<L, R>(self, left: L, right: R) -> keep::KeepRight<L, keep::KeepLeft<Self, R>>
    where
        L: Parser<'code, Cursor = Self::Cursor>,
        R: Parser<'code, Cursor = Self::Cursor>,
    {
        keep::KeepRight::new(left, keep::KeepLeft::new(self, right))
    }

    /// Match this parser surrounded by the same delimiter on both sides
    fn inside<S>(self, surround: S) -> keep::KeepRight<S, keep::KeepLeft<Self, S>>
    where
        S: Parser<'code, Cursor = Self::Cursor> + Clone,
    {
        self.between(surround.clone(), surround)
    }
}

impl<'code, P> SyntaxNodeExt<'code> for P where P: Parser<'code, Output = SyntaxNode<'code>> {}
