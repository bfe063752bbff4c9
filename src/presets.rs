//! Prebuilt pattern matchers for common lexical shapes
//!
//! Each function hands out a [`Pattern`] sharing a compiled program, so
//! grammars can call these freely without recompiling regexes.

use crate::pattern::Pattern;
use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! preset {
    ($(#[$doc:meta])* $name:ident, $pattern:literal) => {
        $(#[$doc])*
        pub fn $name() -> Pattern {
            static COMPILED: Lazy<Regex> =
                Lazy::new(|| Regex::new($pattern).expect("preset pattern"));
            Pattern::from_compiled(COMPILED.clone())
        }
    };
}

preset!(
    /// One or more of `[a-zA-Z]`
    letters,
    "[a-zA-Z]+"
);

preset!(
    /// Any single character from `[a-zA-Z]`
    letter,
    "[a-zA-Z]"
);

preset!(
    /// A single-quoted string like `'hi!'`
    quoted,
    "'[^']*'"
);

preset!(
    /// One or more of `[0-9]`
    digits,
    "[0-9]+"
);

preset!(
    /// Any single digit from `[0-9]`
    digit,
    "[0-9]"
);

preset!(
    /// An integer without leading zeros
    integer,
    "[1-9][0-9]*"
);

preset!(
    /// A float, optionally in scientific notation
    float,
    r"[0-9]*\.[0-9]+([Ee][+\-]?[0-9]+)*"
);

preset!(
    /// A hexadecimal number starting with `0x`
    hexadecimal,
    "0x[1-9a-fA-F][0-9a-fA-F]*"
);

preset!(
    /// Zero or more of space, tab, newline
    opt_space,
    "[ \t\n]*"
);

preset!(
    /// One or more of space, tab, newline
    space,
    "[ \t\n]+"
);
