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
//! # Machine builder
//!
//! Lowers a `Regex` into an `Ndfa` using Thompson's construction: every leaf becomes a two-state machine, and every operator
//! combines the machines built for its operands using the matching combinator.
//!
//! ```
//! # use thompson::*;
//! let ndfa = literal('a').or(literal('b')).star().to_ndfa();
//!
//! assert!(ndfa.matches("abba"));
//! ```
//!

use log::trace;

use super::state_machine::*;
use super::ndfa::*;
use super::combinators::*;
use super::regular_pattern::*;

///
/// Implemented by things that can be converted into an NDFA
///
pub trait ToNdfa<Symbol> {
    ///
    /// Builds a new NDFA that accepts the same language as this object
    ///
    fn to_ndfa(&self) -> Ndfa<Symbol>;
}

impl<Symbol: Clone> ToNdfa<Symbol> for Regex<Symbol> {
    fn to_ndfa(&self) -> Ndfa<Symbol> {
        // Operand machines are dropped as soon as they've been combined
        let result = match self {
            Empty                   => Ndfa::single_transition(Label::Epsilon),
            Literal(symbol)         => Ndfa::single_transition(Label::Symbol(symbol.clone())),
            Union(first, second)    => union(&first.to_ndfa(), &second.to_ndfa()),
            Concat(first, second)   => concat(&first.to_ndfa(), &second.to_ndfa()),
            Star(repeated)          => kleene_star(&repeated.to_ndfa())
        };

        trace!("Built fragment with {} states and {} transitions", result.count_states(), result.transitions().len());

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_is_one_epsilon() {
        let ndfa = Regex::<char>::Empty.to_ndfa();

        assert!(ndfa.count_states() == 2);
        assert!(ndfa.transitions() == &[Transition::new(0, Label::Epsilon, 1)][..]);
        assert!(ndfa.is_accepting(1));
    }

    #[test]
    fn literal_is_one_transition() {
        let ndfa = literal('z').to_ndfa();

        assert!(ndfa.start_state() == 0);
        assert!(ndfa.transitions() == &[Transition::new(0, Label::Symbol('z'), 1)][..]);
        assert!(ndfa.accepting_states().collect::<Vec<_>>() == vec![1]);
    }

    #[test]
    fn union_uses_union_combinator() {
        let ndfa = literal('a').or(literal('b')).to_ndfa();

        assert!(ndfa == union(&literal('a').to_ndfa(), &literal('b').to_ndfa()));
    }

    #[test]
    fn concat_uses_concat_combinator() {
        let ndfa = literal('a').then(literal('b')).to_ndfa();

        assert!(ndfa == concat(&literal('a').to_ndfa(), &literal('b').to_ndfa()));
    }

    #[test]
    fn star_uses_kleene_star() {
        let ndfa = literal('a').star().to_ndfa();

        assert!(ndfa == kleene_star(&literal('a').to_ndfa()));
    }

    #[test]
    fn every_machine_has_an_accepting_state() {
        let patterns = vec![
            Regex::Empty,
            literal('a'),
            literal('a').or(Regex::Empty),
            Regex::Empty.then(literal('b')).star(),
            literal('a').star().star().or(literal('c').then(literal('d')))
        ];

        for pattern in patterns {
            let ndfa = pattern.to_ndfa();

            assert!(ndfa.accepting_states().count() >= 1);
            assert!(ndfa.start_state() < ndfa.count_states());
            assert!(ndfa.transitions().iter().all(|transition| transition.from < ndfa.count_states() && transition.to < ndfa.count_states()));
        }
    }

    #[test]
    fn works_with_other_symbol_types() {
        let ndfa = literal(1u32).then(literal(2u32)).to_ndfa();

        assert!(ndfa.accepts(&[1, 2]));
        assert!(!ndfa.accepts(&[2, 1]));
    }
}
