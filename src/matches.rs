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
//! # Matching strings
//!
//! The simplest way to use this library is to call `matches` with a pattern and a string. This parses the pattern, builds a
//! fresh NDFA for it and runs it once:
//!
//! ```
//! # use thompson::*;
//! assert!(matches("(a|b)*", "abba"));
//! assert!(!matches("(a|b)*", "abc"));
//! ```
//!
//! Nothing is cached between calls. If a pattern needs to be matched against many different strings, compile it once and
//! match the resulting NDFA instead:
//!
//! ```
//! # use thompson::*;
//! let ndfa = compile("c|a*b").unwrap();
//!
//! assert!(ndfa.matches("aaab"));
//! assert!(ndfa.matches("c"));
//! assert!(!ndfa.matches("a"));
//! ```
//!

use log::{debug, warn};

use super::state_machine::*;
use super::ndfa::*;
use super::parser::*;
use super::machine_builder::*;
use super::backtracking_matcher::*;

///
/// Parses a pattern and builds the NDFA that matches it
///
/// Both parsing and building recurse once per level of the expression tree. A long run of literals forms a chain that is
/// as deep as the run, and every nested group adds a level, so callers accepting untrusted patterns should limit their
/// length to keep within the native stack.
///
pub fn compile(pattern: &str) -> Result<Ndfa<char>, ParseError> {
    let regex   = parse(pattern)?;
    let ndfa    = regex.to_ndfa();

    debug!("Compiled {:?} to an NDFA with {} states and {} transitions", pattern, ndfa.count_states(), ndfa.transitions().len());

    Ok(ndfa)
}

///
/// Returns true if the whole of `input` matches `pattern`, or an error if the pattern could not be parsed
///
pub fn try_matches(pattern: &str, input: &str) -> Result<bool, ParseError> {
    let ndfa = compile(pattern)?;

    Ok(ndfa.matches(input))
}

///
/// Returns true if the whole of `input` matches `pattern`
///
/// A pattern that can't be parsed doesn't match anything. Use `try_matches` to find out why a pattern was rejected.
///
/// The pattern is compiled on every call, so the same limits on pattern length apply as for `compile`.
///
pub fn matches(pattern: &str, input: &str) -> bool {
    match try_matches(pattern, input) {
        Ok(result)  => result,
        Err(err)    => {
            warn!("Pattern {:?} could not be parsed: {}", pattern, err);
            false
        }
    }
}

impl Ndfa<char> {
    ///
    /// Returns true if this NDFA accepts the whole of the specified string
    ///
    pub fn matches(&self, input: &str) -> bool {
        let symbols: Vec<char> = input.chars().collect();

        execute(self, &symbols)
    }
}
