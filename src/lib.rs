//! # textcomb - Parser Combinator Library
//!
//! Composable, type-safe parsers for textual grammars: atomic matchers
//! (character, literal, regular expression, token) combine into larger
//! parsers through backtracking combinators. The library emphasizes:
//!
//! - **Zero panics**: every outcome, including configuration mistakes like
//!   an unbound recursive rule, is a `Result` value
//! - **Clean backtracking**: cursors are `Copy` values, so a failed branch
//!   can never leak partial consumption into the next alternative
//! - **Composability**: fluent extension methods (`.and()`, `.or()`,
//!   `.map()`, `.sep_by()`, ...) build expression trees bottom-up, with
//!   [`lazy::Lazy`] closing the loop for recursive rules
//! - **Structured output either way**: typed values through `map`, or
//!   [`tree::SyntaxNode`] trees through the `tree` combinators
//!
//! Parsing is single-threaded and synchronous: one cursor threads through
//! the expression tree by recursive calls. Parser trees holding `Lazy`
//! cells are `Rc`-backed and stay on one thread; independent parses share
//! nothing.
//!
//! ```
//! use textcomb::parser::ParseText;
//! use textcomb::presets::{digits, opt_space};
//! use textcomb::separated_list::SeparatedListExt;
//! use textcomb::keep_left::KeepLeftExt;
//! use textcomb::keep_right::KeepRightExt;
//! use textcomb::character::is_char;
//!
//! let item = opt_space().keep_right(digits()).keep_left(opt_space());
//! let list = is_char('[')
//!     .keep_right(item.sep_by(is_char(',')))
//!     .keep_left(is_char(']'));
//!
//! let (values, _) = list.parse_text("[1, 2, 3]").unwrap();
//! assert_eq!(values, vec!["1", "2", "3"]);
//! ```

pub mod and;
pub mod between;
pub mod character;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod keep_left;
pub mod keep_right;
pub mod lazy;
pub mod lexer;
pub mod literal;
pub mod many;
pub mod map;
pub mod map_err;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod presets;
pub mod recover;
pub mod separated_list;
pub mod some;
pub mod span;
pub mod token;
pub mod tree;

pub use and::{And, AndExt, and};
pub use between::{Between, between, inside};
pub use character::{AnyChar, IsChar, any_char, is_char};
pub use cursor::Cursor;
pub use cursors::{TextCursor, TokenCursor};
pub use error::ParseError;
pub use keep_left::{KeepLeft, KeepLeftExt, keep_left};
pub use keep_right::{KeepRight, KeepRightExt, keep_right};
pub use lazy::Lazy;
pub use lexer::{Lexer, Token};
pub use literal::{Literal, literal};
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use map_err::{MapErr, MapErrExt, map_err};
pub use or::{Or, OrExt, or};
pub use parser::{ParseText, Parser};
pub use pattern::{Pattern, pattern};
pub use recover::{Recover, RecoverExt, recover};
pub use separated_list::{SeparatedList, SeparatedListExt, separated_list};
pub use span::{Span, SpanExt, Spanned};
pub use token::{IsToken, is_token, is_token_text};
pub use tree::{NodeExt, SyntaxNode, SyntaxNodeExt};

#[cfg(test)]
mod tests {
    use crate::character::is_char;
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;
    use crate::keep_left::KeepLeftExt;
    use crate::keep_right::KeepRightExt;
    use crate::lazy::Lazy;
    use crate::lexer::Lexer;
    use crate::or::OrExt;
    use crate::parser::ParseText;
    use crate::presets::{digits, letters, opt_space};
    use crate::span::Span;
    use crate::tree::{NodeExt, SyntaxNode, SyntaxNodeExt, separated};

    /// element = int | str | array
    /// array   = ows '[' ows ( element sepby ( ',' ows ) ) ']' ows
    fn array_grammar<'code>() -> Lazy<'code, TextCursor<'code>, SyntaxNode<'code>> {
        let array: Lazy<TextCursor, SyntaxNode> = Lazy::new();

        let lbra = is_char('[').node("lbra").then(opt_space());
        let rbra = is_char(']').node("rbra").then(opt_space());
        let comm = is_char(',').node("comm").then(opt_space());

        let element = digits()
            .node("int")
            .or(letters().node("str"))
            .or(array.clone());

        let items = separated(element, comm);
        array.bind(
            items
                .between(opt_space().keep_right(lbra), rbra)
                .rename("array"),
        );
        array
    }

    #[test]
    fn test_recursive_array_mixed() {
        let text = " [ [1, 3, 5], [hi, howdy, bye], 42, [[1,2], [4,5]]] ";
        let array = array_grammar();

        let (tree, cursor) = array.parse_text(text).unwrap();
        assert!(cursor.eos());
        assert_eq!(tree.kind, "array");
        assert_eq!(tree.len(), 4);

        assert_eq!(tree[0].kind, "array");
        assert_eq!(tree[0].len(), 3);
        assert_eq!(tree[0][0].value, Some("1"));

        assert_eq!(tree[1][1].kind, "str");
        assert_eq!(tree[1][1].value, Some("howdy"));

        assert_eq!(tree[2].kind, "int");
        assert_eq!(tree[2].value, Some("42"));

        // depth three: array -> array -> int
        assert_eq!(tree[3].kind, "array");
        assert_eq!(tree[3][0].kind, "array");
        assert_eq!(tree[3][0][1].value, Some("2"));
        assert_eq!(tree[3][1][0].value, Some("4"));
    }

    #[test]
    fn test_recursive_array_nesting_mirrors_brackets() {
        let array = array_grammar();
        let (tree, _) = array.parse_text("[[1,2],[4,5]]").unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].len(), 2);
        assert_eq!(tree[1].len(), 2);
        assert_eq!(tree[0][0].value, Some("1"));
        assert_eq!(tree[1][1].value, Some("5"));
        // spans mirror the bracket nesting exactly
        assert_eq!(tree.span, Span::new(0, 13));
        assert_eq!(tree[0].span, Span::new(1, 6));
        assert_eq!(tree[1].span, Span::new(7, 12));
    }

    #[test]
    fn test_recursive_array_failure_keeps_diagnostics() {
        let array = array_grammar();
        let error = array.parse_text("[1, ?]").unwrap_err();

        // the deepest branch failure points at the offending character
        assert_eq!(error.deepest().span().start, 4);
    }

    #[test]
    fn test_text_and_token_layers_agree() {
        use crate::and::AndExt;
        use crate::parser::Parser;
        use crate::token::is_token;

        let lexer = Lexer::new(&[
            (None, r"[ \t\n]+"),
            (Some("number"), "[0-9]+"),
            (Some("word"), "[a-zA-Z]+"),
        ])
        .unwrap();
        let tokens = lexer.tokenize("say 42").unwrap();

        let cursor = crate::cursors::TokenCursor::new(&tokens);
        let parser = is_token("word").and(is_token("number"));

        let ((word, number), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(word, "say");
        assert_eq!(number, "42");
        assert!(cursor.eos());
    }

    #[test]
    fn test_padded_scalar() {
        let scalar = opt_space().keep_right(digits()).keep_left(opt_space());
        let (value, cursor) = scalar.parse_text("  42  ").unwrap();
        assert_eq!(value, "42");
        assert!(cursor.eos());
    }
}
