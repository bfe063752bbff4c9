use crate::span::Span;
use std::borrow::Cow;
use thiserror::Error;

/// The failure half of every parse attempt.
///
/// Failures are values: each combinator inspects its child's result and
/// decides whether to propagate, retry another branch, backtrack, or
/// recover. Nothing here unwinds the call tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// An atomic matcher's expectation was not met
    #[error("@{span}: {message}")]
    Mismatch {
        message: String,
        span: Span,
        /// Label of the matcher that produced the failure, e.g. `char('a')`
        parser: Cow<'static, str>,
    },

    /// Every alternative of an ordered choice failed.
    ///
    /// `furthest` keeps the branch failure that progressed deepest into the
    /// input; the choice itself reports at its own start position.
    #[error("@{span}: no choice was left")]
    NoChoiceMatched {
        span: Span,
        furthest: Option<Box<ParseError>>,
    },

    /// A lazy parser was invoked before being bound to a target
    #[error("@{span}: lazy parser was never bound")]
    UnboundLazy { span: Span },

    /// The tokenizer hit text that matches no lexical rule
    #[error("@{span}: no lexical rule matches")]
    UnknownToken { span: Span },

    /// A regular-expression pattern failed to compile
    #[error("invalid pattern {pattern:?}: {reason}")]
    BadPattern { pattern: String, reason: String },
}

impl ParseError {
    /// The input region this failure refers to
    pub fn span(&self) -> Span {
        match self {
            ParseError::Mismatch { span, .. }
            | ParseError::NoChoiceMatched { span, .. }
            | ParseError::UnboundLazy { span }
            | ParseError::UnknownToken { span } => *span,
            ParseError::BadPattern { .. } => Span::empty(0),
        }
    }

    /// Flatten exhausted choices down to the branch failure that made it
    /// furthest into the input
    pub fn deepest(&self) -> &ParseError {
        match self {
            ParseError::NoChoiceMatched {
                furthest: Some(inner),
                ..
            } => inner.deepest(),
            _ => self,
        }
    }

    /// Consuming variant of [`deepest`](Self::deepest)
    pub fn into_deepest(self) -> ParseError {
        match self {
            ParseError::NoChoiceMatched {
                furthest: Some(inner),
                ..
            } => inner.into_deepest(),
            other => other,
        }
    }

    /// Of two failures, the one whose deepest point lies further into the
    /// input; ties go to `self`
    pub fn further(self, other: ParseError) -> ParseError {
        if other.deepest().span().start > self.deepest().span().start {
            other
        } else {
            self
        }
    }

    /// Render the failure with an annotated excerpt of `source`: the
    /// surrounding lines plus a caret under the failing position.
    pub fn context(&self, source: &str) -> String {
        let pos = self.deepest().span().start.min(source.len());

        let mut line = 1;
        let mut line_start = 0;
        for (i, byte) in source.bytes().enumerate() {
            if i >= pos {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        let offset = pos - line_start;

        let mut out = format!("{} (line {}, byte offset {})\n", self, line, offset);
        for (number, content) in source.lines().enumerate() {
            let number = number + 1;
            if number + 2 < line || number > line + 2 {
                continue;
            }
            let prefix = if number == line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            out.push_str(&prefix);
            out.push_str(content);
            out.push('\n');
            if number == line {
                out.push_str(&" ".repeat(prefix.len() + offset));
                out.push_str("^--- here\n");
            }
        }
        out
    }
}
