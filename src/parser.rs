//
//   Copyright 2016 Andrew Hunter
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.
//

//!
//! # Parser
//!
//! Reads a pattern string into a `Regex<char>`. The syntax is deliberately small:
//!
//! ```text
//! regex  := term ('|' regex)?
//! term   := factor*
//! factor := base '*'*
//! base   := '(' regex ')' | '\' any-char | any-char
//! ```
//!
//! `*` binds tighter than concatenation, which binds tighter than `|`. A term with no factors matches the empty string, so
//! `a|` and `()` are both valid. Any symbol can be matched literally by escaping it with `\`, and a `*` with nothing before
//! it to repeat is read as a literal `*`.
//!
//! The parser is recursive, so very deeply nested groups use a correspondingly deep native stack.
//!

use thiserror::Error;

use super::regular_pattern::*;

///
/// Reasons a pattern string can fail to parse
///
/// Positions are offsets in symbols (not bytes) from the start of the pattern.
///
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseError {
    #[error("group opened at position {0} is never closed")]
    UnclosedGroup(usize),

    #[error("unexpected ')' at position {0}")]
    UnmatchedCloseParenthesis(usize),

    #[error("escape at position {0} is not followed by a symbol")]
    DanglingEscape(usize)
}

///
/// Recursive-descent parser over the symbols of a pattern
///
struct Parser {
    symbols: Vec<char>,
    cursor: usize
}

impl Parser {
    fn new(pattern: &str) -> Parser {
        Parser { symbols: pattern.chars().collect(), cursor: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.symbols.get(self.cursor).cloned()
    }

    #[inline]
    fn next(&mut self) -> Option<char> {
        let result = self.peek();
        if result.is_some() {
            self.cursor += 1;
        }
        result
    }

    fn parse_regex(&mut self) -> Result<Regex<char>, ParseError> {
        let term = self.parse_term()?;

        if self.peek() == Some('|') {
            self.cursor += 1;

            let rest = self.parse_regex()?;
            Ok(term.or(rest))
        } else {
            Ok(term)
        }
    }

    fn parse_term(&mut self) -> Result<Regex<char>, ParseError> {
        let mut term = None;

        while let Some(symbol) = self.peek() {
            if symbol == ')' || symbol == '|' {
                break;
            }

            let factor = self.parse_factor()?;

            term = Some(match term {
                None            => factor,
                Some(previous)  => Regex::then(previous, factor)
            });
        }

        Ok(term.unwrap_or(Empty))
    }

    fn parse_factor(&mut self) -> Result<Regex<char>, ParseError> {
        let mut factor = self.parse_base()?;

        while self.peek() == Some('*') {
            self.cursor += 1;
            factor = factor.star();
        }

        Ok(factor)
    }

    fn parse_base(&mut self) -> Result<Regex<char>, ParseError> {
        let position = self.cursor;

        match self.next() {
            Some('(') => {
                let group = self.parse_regex()?;

                if self.next() == Some(')') {
                    Ok(group)
                } else {
                    Err(ParseError::UnclosedGroup(position))
                }
            },

            Some('\\') => {
                self.next()
                    .map(Literal)
                    .ok_or(ParseError::DanglingEscape(position))
            },

            Some(symbol) => Ok(Literal(symbol)),

            // Terms stop at the end of the pattern, so there is always a symbol here
            None => Ok(Empty)
        }
    }
}

///
/// Parses a pattern string into a regular expression
///
pub fn parse(pattern: &str) -> Result<Regex<char>, ParseError> {
    let mut parser  = Parser::new(pattern);
    let regex       = parser.parse_regex()?;

    // The only thing that can stop the top-level expression early is a ')' with no matching '('
    if parser.cursor < parser.symbols.len() {
        Err(ParseError::UnmatchedCloseParenthesis(parser.cursor))
    } else {
        Ok(regex)
    }
}
