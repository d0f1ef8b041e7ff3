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
//! # State machine
//!
//! The `StateMachine` trait is implemented by anything that represents a state machine (aka a finite state automaton). These
//! consist of one or more states that are transitioned between upon matching a symbol from the input, or between which the
//! machine can move freely via an 'epsilon' transition that consumes nothing.
//!
//! A state that is marked as accepting will cause the input to match if the machine can be in that state once every symbol
//! has been read.
//!

use std::fmt;

use serde_derive::{Serialize, Deserialize};

///
/// Identifies a state in a state machine
///
pub type StateId = usize;

///
/// The label attached to a transition
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Label<Symbol> {
    /// Can be followed without consuming any input
    Epsilon,

    /// Followed when the next input symbol is equal to this one
    Symbol(Symbol)
}

impl<Symbol> Label<Symbol> {
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        match self {
            Label::Epsilon      => true,
            Label::Symbol(_)    => false
        }
    }

    ///
    /// True if this label consumes the specified input symbol
    ///
    #[inline]
    pub fn accepts(&self, symbol: &Symbol) -> bool where Symbol: PartialEq {
        match self {
            Label::Epsilon          => false,
            Label::Symbol(label)    => label == symbol
        }
    }
}

impl<Symbol: fmt::Display> fmt::Display for Label<Symbol> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Epsilon          => write!(f, "ε"),
            Label::Symbol(symbol)   => write!(f, "{}", symbol)
        }
    }
}

///
/// A single edge in a state machine
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition<Symbol> {
    /// State this transition leaves from
    pub from: StateId,

    /// State this transition arrives at
    pub to: StateId,

    /// What must be read to follow this transition
    pub label: Label<Symbol>
}

impl<Symbol> Transition<Symbol> {
    #[inline]
    pub fn new(from: StateId, label: Label<Symbol>, to: StateId) -> Transition<Symbol> {
        Transition { from: from, to: to, label: label }
    }
}

impl<Symbol: Clone> Transition<Symbol> {
    ///
    /// Returns a copy of this transition with both endpoints moved up by `offset`
    ///
    #[inline]
    pub fn offset_by(&self, offset: StateId) -> Transition<Symbol> {
        Transition { from: self.from + offset, to: self.to + offset, label: self.label.clone() }
    }
}

///
/// Trait implemented by objects that represent a (possibly nondeterministic) state machine
///
/// States are plain indexes. Every state referenced by the machine is in the range `0..count_states()`.
///
pub trait StateMachine<Symbol> {
    ///
    /// Returns the number of states in this state machine (one more than the highest state referenced)
    ///
    fn count_states(&self) -> StateId;

    ///
    /// The state that matching begins in
    ///
    fn start_state(&self) -> StateId;

    ///
    /// True if finishing the input in the specified state means the input was accepted
    ///
    fn is_accepting(&self, state: StateId) -> bool;

    ///
    /// Every transition in this machine, in the order they were added
    ///
    /// The position of a transition in this slice is its identity: it's stable for the lifetime of the machine.
    ///
    fn transitions(&self) -> &[Transition<Symbol>];
}

///
/// Trait implemented by state machines that can be altered
///
/// Machines are only ever added to: once a transition is added it is never changed or removed.
///
pub trait MutableStateMachine<Symbol> : StateMachine<Symbol> {
    ///
    /// Adds a transition from a particular state to another
    ///
    fn add_transition(&mut self, from: StateId, label: Label<Symbol>, to: StateId);

    ///
    /// Marks a state as accepting
    ///
    fn set_accepting(&mut self, state: StateId);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn epsilon_accepts_nothing() {
        let label: Label<char> = Label::Epsilon;

        assert!(label.is_epsilon());
        assert!(!label.accepts(&'a'));
    }

    #[test]
    fn symbol_accepts_itself_only() {
        let label = Label::Symbol('a');

        assert!(!label.is_epsilon());
        assert!(label.accepts(&'a'));
        assert!(!label.accepts(&'b'));
    }

    #[test]
    fn can_offset_transition() {
        let transition = Transition::new(1, Label::Symbol('x'), 3);
        let moved      = transition.offset_by(4);

        assert!(moved == Transition::new(5, Label::Symbol('x'), 7));
        assert!(transition.from == 1);
    }

    #[test]
    fn labels_display() {
        assert!(format!("{}", Label::Symbol('q')) == "q");
        assert!(format!("{}", Label::<char>::Epsilon) == "ε");
    }
}
