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
//! The acronym NDFA stands for 'Non-Deterministic Finite Automaton'. An NDFA is a state machine where each state can have
//! transitions for more than one target state - this allows it to be in more than one state at once, which is the property
//! that makes it non-deterministic. Transitions can also be labelled 'epsilon', in which case they can be followed without
//! reading anything from the input.
//!
//! An NDFA can be built by hand using the methods in `MutableStateMachine`:
//!
//! ```
//! # use thompson::*;
//! let mut ndfa: Ndfa<char> = Ndfa::new(0);
//! ndfa.add_transition(0, Label::Symbol('a'), 1);
//! ndfa.add_transition(1, Label::Epsilon, 0);
//! ndfa.set_accepting(1);
//!
//! assert!(ndfa.matches("aaa"));
//! ```
//!
//! More usually, they are built from a `Regex` using `to_ndfa()`, or from a pattern string using `compile()`.
//!

use std::collections::BTreeSet;
use std::fmt;

use serde_derive::{Serialize, Deserialize};

use super::state_machine::*;

///
/// Represents a non-deterministic finite-state automaton with epsilon transitions
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "SerializedNdfa<Symbol>")]
pub struct Ndfa<Symbol> {
    /// Highest state ID referenced anywhere in this machine (recalculated when deserializing)
    #[serde(skip_serializing)]
    max_state: StateId,

    /// The state where matching begins
    start_state: StateId,

    /// States where the input is accepted if it's been fully read
    accepting_states: BTreeSet<StateId>,

    /// The transitions making up this machine, in the order they were added
    transitions: Vec<Transition<Symbol>>
}

///
/// The stored form of an NDFA
///
/// `Ndfa` is deserialized through this so that the highest state is worked out from the states the machine actually uses.
///
#[derive(Deserialize)]
struct SerializedNdfa<Symbol> {
    start_state: StateId,
    accepting_states: BTreeSet<StateId>,
    transitions: Vec<Transition<Symbol>>
}

impl<Symbol> From<SerializedNdfa<Symbol>> for Ndfa<Symbol> {
    fn from(serialized: SerializedNdfa<Symbol>) -> Ndfa<Symbol> {
        let mut result = Ndfa::new(serialized.start_state);

        for transition in serialized.transitions {
            result.add_transition(transition.from, transition.label, transition.to);
        }

        for state in serialized.accepting_states {
            result.set_accepting(state);
        }

        result
    }
}

impl<Symbol> Ndfa<Symbol> {
    ///
    /// Creates a new non-deterministic finite automaton starting in the specified state
    ///
    /// The NDFA initially has no transitions and no accepting states.
    ///
    pub fn new(start_state: StateId) -> Ndfa<Symbol> {
        Ndfa { max_state: start_state, start_state: start_state, accepting_states: BTreeSet::new(), transitions: vec![] }
    }

    ///
    /// Creates the two-state machine `0 --label--> 1` where state 1 is accepting
    ///
    pub fn single_transition(label: Label<Symbol>) -> Ndfa<Symbol> {
        let mut result = Ndfa::new(0);

        result.add_transition(0, label, 1);
        result.set_accepting(1);

        result
    }

    ///
    /// The highest state ID referenced by this machine (by its start state, its transitions or its accepting states)
    ///
    #[inline]
    pub fn max_state(&self) -> StateId {
        self.max_state
    }

    ///
    /// The accepting states for this machine, in ascending order
    ///
    #[inline]
    pub fn accepting_states<'a>(&'a self) -> impl 'a+Iterator<Item=StateId> {
        self.accepting_states.iter().cloned()
    }

    #[inline]
    fn include_state(&mut self, state: StateId) {
        if state > self.max_state {
            self.max_state = state;
        }
    }
}

impl<Symbol> StateMachine<Symbol> for Ndfa<Symbol> {
    #[inline]
    fn count_states(&self) -> StateId {
        self.max_state + 1
    }

    #[inline]
    fn start_state(&self) -> StateId {
        self.start_state
    }

    #[inline]
    fn is_accepting(&self, state: StateId) -> bool {
        self.accepting_states.contains(&state)
    }

    #[inline]
    fn transitions(&self) -> &[Transition<Symbol>] {
        &self.transitions
    }
}

impl<Symbol> MutableStateMachine<Symbol> for Ndfa<Symbol> {
    ///
    /// Creates a new transition in the state machine
    ///
    fn add_transition(&mut self, from: StateId, label: Label<Symbol>, to: StateId) {
        // Make sure that max_state reflects the highest state added by the user
        self.include_state(from);
        self.include_state(to);

        self.transitions.push(Transition::new(from, label, to));
    }

    ///
    /// Marks a state as accepting
    ///
    fn set_accepting(&mut self, state: StateId) {
        self.include_state(state);
        self.accepting_states.insert(state);
    }
}

impl<Symbol: fmt::Display> fmt::Display for Ndfa<Symbol> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "start: {}", self.start_state)?;

        write!(f, "accepting:")?;
        for state in &self.accepting_states {
            write!(f, " {}", state)?;
        }
        writeln!(f)?;

        for transition in &self.transitions {
            writeln!(f, "{} --{}--> {}", transition.from, transition.label, transition.to)?;
        }

        Ok(())
    }
}
