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
//! # Combinators
//!
//! The three structural operations of Thompson's construction. Each of these reads one or two machines and produces a brand new
//! machine: the operands are left untouched and can be reused or dropped independently of the result.
//!
//! Combining two machines means that the states of (at least) one of them have to be renumbered so they don't collide. The
//! offset is always taken from the highest state the operand actually references, which isn't necessarily related to the number
//! of transitions it has.
//!

use super::state_machine::*;
use super::ndfa::*;

///
/// Copies every transition in `source` into `target`, renumbering the states by `offset`
///
fn copy_transitions<Symbol: Clone>(target: &mut Ndfa<Symbol>, source: &Ndfa<Symbol>, offset: StateId) {
    for transition in source.transitions() {
        let moved = transition.offset_by(offset);
        target.add_transition(moved.from, moved.label, moved.to);
    }
}

///
/// Creates a machine that accepts anything that either `first` or `second` accepts
///
/// The result starts in a new state 0, with epsilon transitions to the (renumbered) start states of both machines. The accepting
/// states of both machines are kept as they are: no merging accepting state is introduced.
///
pub fn union<Symbol: Clone>(first: &Ndfa<Symbol>, second: &Ndfa<Symbol>) -> Ndfa<Symbol> {
    let first_offset    = 1;
    let second_offset   = first.max_state() + first_offset + 1;

    let mut result      = Ndfa::new(0);

    result.add_transition(0, Label::Epsilon, first.start_state() + first_offset);
    result.add_transition(0, Label::Epsilon, second.start_state() + second_offset);

    copy_transitions(&mut result, first, first_offset);
    copy_transitions(&mut result, second, second_offset);

    for accepting in first.accepting_states() {
        result.set_accepting(accepting + first_offset);
    }

    for accepting in second.accepting_states() {
        result.set_accepting(accepting + second_offset);
    }

    result
}

///
/// Creates a machine that accepts anything `first` accepts followed by anything `second` accepts
///
pub fn concat<Symbol: Clone>(first: &Ndfa<Symbol>, second: &Ndfa<Symbol>) -> Ndfa<Symbol> {
    // The first machine keeps its numbering, the second goes after it
    let second_offset   = first.max_state() + 1;
    let second_start    = second.start_state() + second_offset;

    let mut result      = Ndfa::new(first.start_state());

    copy_transitions(&mut result, first, 0);
    copy_transitions(&mut result, second, second_offset);

    // Finishing the first machine moves on to the second
    for accepting in first.accepting_states() {
        result.add_transition(accepting, Label::Epsilon, second_start);
    }

    for accepting in second.accepting_states() {
        result.set_accepting(accepting + second_offset);
    }

    result
}

///
/// Creates a machine that accepts zero or more repetitions of anything `machine` accepts
///
/// Two new states are added above the existing ones: a new start state and a single new accepting state. The result always
/// contains an epsilon cycle (from the original accepting states back to the original start state).
///
pub fn kleene_star<Symbol: Clone>(machine: &Ndfa<Symbol>) -> Ndfa<Symbol> {
    let original_start  = machine.start_state();
    let new_start       = machine.max_state() + 1;
    let new_accepting   = machine.max_state() + 2;

    let mut result      = Ndfa::new(new_start);

    copy_transitions(&mut result, machine, 0);

    // Enter the body
    result.add_transition(new_start, Label::Epsilon, original_start);

    // Leave the body
    for accepting in machine.accepting_states() {
        result.add_transition(accepting, Label::Epsilon, new_accepting);
    }

    // Zero repetitions
    result.add_transition(new_start, Label::Epsilon, new_accepting);

    // Go round again
    for accepting in machine.accepting_states() {
        result.add_transition(accepting, Label::Epsilon, original_start);
    }

    result.set_accepting(new_accepting);

    result
}
