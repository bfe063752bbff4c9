use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use std::cell::RefCell;
use std::rc::Rc;

/// A forward-reference placeholder for recursive grammar rules
///
/// Parser expressions are built bottom-up, so a rule cannot reference
/// itself directly. `Lazy` is an indirection cell: create it empty, clone
/// it into any expression that needs the rule, then [`bind`](Lazy::bind)
/// the finished expression to it. All clones share one cell.
///
/// Running an unbound cell fails with [`ParseError::UnboundLazy`]; binding
/// must happen before the first parse. A rule that (transitively) holds a
/// clone of its own cell keeps itself alive for the life of the program.
pub struct Lazy<'code, C, O>
where
    C: Cursor<'code>,
{
    cell: Cell<'code, C, O>,
}

type Target<'code, C, O> = Rc<dyn Parser<'code, Cursor = C, Output = O> + 'code>;
type Cell<'code, C, O> = Rc<RefCell<Option<Target<'code, C, O>>>>;

impl<'code, C, O> Lazy<'code, C, O>
where
    C: Cursor<'code>,
{
    /// Create an unbound cell
    pub fn new() -> Self {
        Lazy {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// Bind the cell to its target parser, replacing any previous binding
    pub fn bind(&self, parser: impl Parser<'code, Cursor = C, Output = O> + 'code) {
        *self.cell.borrow_mut() = Some(Rc::new(parser));
    }

    pub fn is_bound(&self) -> bool {
        self.cell.borrow().is_some()
    }
}

impl<'code, C, O> Default for Lazy<'code, C, O>
where
    C: Cursor<'code>,
{
    fn default() -> Self {
        Lazy::new()
    }
}

impl<'code, C, O> Clone for Lazy<'code, C, O>
where
    C: Cursor<'code>,
{
    fn clone(&self) -> Self {
        Lazy {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<'code, C, O> Parser<'code> for Lazy<'code, C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), ParseError> {
        let target = self.cell.borrow().clone();
        match target {
            Some(parser) => parser.parse(cursor),
            None => Err(ParseError::UnboundLazy {
                span: Span::empty(cursor.position()),
            }),
        }
    }
}

/// Convenience function to create an unbound Lazy parser
pub fn lazy<'code, C, O>() -> Lazy<'code, C, O>
where
    C: Cursor<'code>,
{
    Lazy::new()
}
