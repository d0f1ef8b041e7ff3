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
//! This provides a data structure, `Regex<Symbol>` representing a regular expression as a tree of operators. Using `char` as
//! the symbol type gives the structure produced by `parse()`, but any symbol type can be used to build expressions by hand:
//!
//! ```
//! # use thompson::*;
//! let a_or_b          = literal('a').or(literal('b'));
//! let any_amount      = a_or_b.clone().star();
//! let ones_then_twos  = literal(1).star().then(literal(2).star());
//! ```
//!
//! Formatting a `Regex<char>` produces a pattern string that parses back into an equivalent expression.
//!

use std::fmt;

use serde_derive::{Serialize, Deserialize};

///
/// A regular expression over a particular type of symbol
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Regex<Symbol> {
    ///
    /// Matches the empty string
    ///
    Empty,

    ///
    /// Matches a single symbol
    ///
    Literal(Symbol),

    ///
    /// Matches anything that either of two expressions matches
    ///
    Union(Box<Regex<Symbol>>, Box<Regex<Symbol>>),

    ///
    /// Matches one expression followed by another
    ///
    Concat(Box<Regex<Symbol>>, Box<Regex<Symbol>>),

    ///
    /// Matches zero or more repetitions of an expression
    ///
    Star(Box<Regex<Symbol>>)
}

pub use self::Regex::*;

///
/// Creates an expression matching a single symbol
///
#[inline]
pub fn literal<Symbol>(symbol: Symbol) -> Regex<Symbol> {
    Literal(symbol)
}

impl<Symbol> Regex<Symbol> {
    /// Matches either this expression or the specified one
    pub fn or(self, other: Regex<Symbol>) -> Regex<Symbol> {
        Union(Box::new(self), Box::new(other))
    }

    /// Matches this expression followed by the specified one
    pub fn then(self, other: Regex<Symbol>) -> Regex<Symbol> {
        Concat(Box::new(self), Box::new(other))
    }

    /// Matches any number of repetitions of this expression
    pub fn star(self) -> Regex<Symbol> {
        Star(Box::new(self))
    }
}

///
/// Symbols that have a meaning of their own in the pattern syntax
///
const OPERATORS: &[char] = &['(', ')', '|', '*', '\\'];

impl fmt::Display for Regex<char> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Empty               => Ok(()),

            Literal(symbol)     => {
                if OPERATORS.contains(symbol) {
                    write!(f, "\\{}", symbol)
                } else {
                    write!(f, "{}", symbol)
                }
            },

            // Unions are always bracketed, so they can appear anywhere
            Union(first, second)    => write!(f, "({}|{})", first, second),

            Concat(first, second)   => write!(f, "{}{}", first, second),

            Star(repeated)          => {
                match **repeated {
                    // These already form a single factor
                    Literal(_) | Union(_, _) | Star(_)  => write!(f, "{}*", repeated),
                    Empty | Concat(_, _)                => write!(f, "({})*", repeated)
                }
            }
        }
    }
}
