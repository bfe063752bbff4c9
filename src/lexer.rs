use crate::error::ParseError;
use crate::span::Span;
use regex::Regex;

/// One lexical unit produced by [`Lexer::tokenize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'code> {
    /// The tag of the rule that matched
    pub kind: &'static str,
    /// The matched slice of the source
    pub text: &'code str,
    /// Source byte offsets of the match
    pub span: Span,
}

/// A rule-driven tokenizer
///
/// Rules are ordered `(tag, pattern)` pairs. At each position the rules
/// are tried in declaration order and the first match wins; a `None` tag
/// means the match is consumed but produces no token (whitespace). Text
/// matching no rule at all is a [`ParseError::UnknownToken`] failure;
/// tokenization is all or nothing.
///
/// A rule match is only taken where it starts exactly at the current
/// position and consumes at least one byte; a zero-width match counts as
/// no match, so a careless `x*` rule cannot stall the scan.
#[derive(Debug)]
pub struct Lexer {
    rules: Vec<(Option<&'static str>, Regex)>,
}

impl Lexer {
    /// Compile the rule set; a malformed pattern fails construction
    pub fn new(rules: &[(Option<&'static str>, &str)]) -> Result<Self, ParseError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (tag, pattern) in rules {
            let regex = Regex::new(pattern).map_err(|error| ParseError::BadPattern {
                pattern: (*pattern).to_string(),
                reason: error.to_string(),
            })?;
            compiled.push((*tag, regex));
        }
        Ok(Lexer { rules: compiled })
    }

    /// Split `text` into tokens, greedily, left to right
    pub fn tokenize<'code>(&self, text: &'code str) -> Result<Vec<Token<'code>>, ParseError> {
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < text.len() {
            let mut matched = false;
            for (tag, regex) in &self.rules {
                let Some(found) = regex.find_at(text, position) else {
                    continue;
                };
                if found.start() != position || found.end() == position {
                    continue;
                }
                if let Some(tag) = *tag {
                    tokens.push(Token {
                        kind: tag,
                        text: found.as_str(),
                        span: Span::new(position, found.end()),
                    });
                }
                position = found.end();
                matched = true;
                break;
            }
            if !matched {
                return Err(ParseError::UnknownToken {
                    span: Span::empty(position),
                });
            }
        }
        Ok(tokens)
    }
}
