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
//! # Backtracking matcher
//!
//! Decides whether a state machine accepts an input by searching for a path through it. The search uses an explicit stack of
//! `(state, position)` contexts rather than recursion, and explores the most recently found context first.
//!
//! Machines built with `kleene_star` always contain cycles made of epsilon transitions, and nested stars produce cycles within
//! cycles. Following these naively never terminates, so the search remembers every (epsilon transition, context) pair it has
//! followed and never follows the same one twice. Symbol transitions always move the position forward so they need no such
//! record. Together these bound the number of epsilon moves by `epsilon transitions * (input length + 1)`.
//!
//! The worst-case cost of the search is still exponential in the number of branch points in the machine.
//!

use std::collections::HashSet;

use log::debug;

use super::state_machine::*;
use super::ndfa::*;

///
/// A point in the search: the machine is in `state` and has read `position` symbols
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct ExecutionContext {
    state: StateId,
    position: usize
}

///
/// Counts of the work done by a single search
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
    /// Number of contexts taken from the stack
    pub contexts_visited: usize,

    /// Number of epsilon transitions followed
    pub epsilon_moves: usize,

    /// Number of symbol transitions followed
    pub symbol_moves: usize
}

///
/// Groups the indexes of the transitions in a machine by the state they leave from
///
fn outgoing_transitions<Symbol, Machine: StateMachine<Symbol>+?Sized>(machine: &Machine) -> Vec<Vec<usize>> {
    let mut outgoing = vec![vec![]; machine.count_states()];

    for (index, transition) in machine.transitions().iter().enumerate() {
        // Other implementations of StateMachine might under-report their state count
        if transition.from >= outgoing.len() {
            outgoing.resize(transition.from + 1, vec![]);
        }

        outgoing[transition.from].push(index);
    }

    outgoing
}

///
/// Runs a state machine against an input, returning whether or not it accepts it along with the work that was needed to
/// decide
///
pub fn execute_with_stats<Symbol, Machine>(machine: &Machine, input: &[Symbol]) -> (bool, SearchStats)
where Symbol: PartialEq, Machine: StateMachine<Symbol>+?Sized {
    let transitions = machine.transitions();
    let outgoing    = outgoing_transitions::<Symbol, Machine>(machine);
    let mut stats   = SearchStats::default();

    // Everything the search needs is local to this call, so a machine can be matched from several places at once
    let mut stack               = vec![ExecutionContext { state: machine.start_state(), position: 0 }];
    let mut followed_epsilon    = HashSet::<(usize, ExecutionContext)>::new();

    while let Some(context) = stack.pop() {
        stats.contexts_visited += 1;

        let from_here = outgoing.get(context.state).map(|indexes| indexes.as_slice()).unwrap_or(&[]);

        // Epsilon transitions can be followed at any position, but only once from any given context
        for &index in from_here {
            let transition = &transitions[index];

            if transition.label.is_epsilon() && followed_epsilon.insert((index, context)) {
                stack.push(ExecutionContext { state: transition.to, position: context.position });
                stats.epsilon_moves += 1;
            }
        }

        if context.position == input.len() {
            // Reading everything and ending in an accepting state means the input matches; otherwise this is just a dead end
            if machine.is_accepting(context.state) {
                debug!("Accepted input of length {} in state {} ({:?})", input.len(), context.state, stats);
                return (true, stats);
            }
        } else {
            let symbol = &input[context.position];

            for &index in from_here {
                let transition = &transitions[index];

                if transition.label.accepts(symbol) {
                    stack.push(ExecutionContext { state: transition.to, position: context.position + 1 });
                    stats.symbol_moves += 1;
                }
            }
        }
    }

    debug!("Rejected input of length {} ({:?})", input.len(), stats);
    (false, stats)
}

///
/// Returns true if a state machine accepts the specified input
///
#[inline]
pub fn execute<Symbol, Machine>(machine: &Machine, input: &[Symbol]) -> bool
where Symbol: PartialEq, Machine: StateMachine<Symbol>+?Sized {
    execute_with_stats(machine, input).0
}

impl<Symbol: PartialEq> Ndfa<Symbol> {
    ///
    /// Returns true if this NDFA accepts the specified sequence of symbols
    ///
    #[inline]
    pub fn accepts(&self, input: &[Symbol]) -> bool {
        execute(self, input)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::regular_pattern::*;
    use super::super::machine_builder::*;
    use super::super::combinators::*;

    fn chars(input: &str) -> Vec<char> {
        input.chars().collect()
    }

    ///
    /// Machine with an epsilon cycle between states 1 and 2: accepts any non-empty string of 'a's and 'b's
    ///
    fn a_b_loop() -> Ndfa<char> {
        let mut ndfa = Ndfa::new(0);

        ndfa.set_accepting(1);
        ndfa.add_transition(0, Label::Symbol('a'), 1);
        ndfa.add_transition(0, Label::Symbol('b'), 2);
        ndfa.add_transition(1, Label::Epsilon, 2);
        ndfa.add_transition(2, Label::Epsilon, 1);
        ndfa.add_transition(1, Label::Symbol('a'), 1);
        ndfa.add_transition(2, Label::Symbol('b'), 2);

        ndfa
    }

    ///
    /// Machine matching exactly "cd"
    ///
    fn c_d() -> Ndfa<char> {
        let mut ndfa = Ndfa::new(0);

        ndfa.set_accepting(2);
        ndfa.add_transition(0, Label::Symbol('c'), 1);
        ndfa.add_transition(1, Label::Symbol('d'), 2);

        ndfa
    }

    #[test]
    fn hand_built_machine_with_epsilon_cycle() {
        let ndfa = a_b_loop();

        assert!(!ndfa.accepts(&chars("")));
        assert!(ndfa.accepts(&chars("a")));
        assert!(ndfa.accepts(&chars("b")));
        assert!(ndfa.accepts(&chars("ab")));
        assert!(ndfa.accepts(&chars("ba")));
        assert!(ndfa.accepts(&chars("bababababa")));
        assert!(ndfa.accepts(&chars("babbababbabbabaaababab")));
        assert!(!ndfa.accepts(&chars("abc")));
    }

    #[test]
    fn hand_built_sequence() {
        let ndfa = c_d();

        assert!(!ndfa.accepts(&chars("")));
        assert!(!ndfa.accepts(&chars("c")));
        assert!(!ndfa.accepts(&chars("d")));
        assert!(ndfa.accepts(&chars("cd")));
        assert!(!ndfa.accepts(&chars("test")));
    }

    #[test]
    fn union_of_hand_built_machines() {
        let ndfa = union(&a_b_loop(), &c_d());

        assert!(!ndfa.accepts(&chars("")));
        assert!(ndfa.accepts(&chars("a")));
        assert!(ndfa.accepts(&chars("babbababbabbabaaababab")));
        assert!(ndfa.accepts(&chars("cd")));
        assert!(!ndfa.accepts(&chars("c")));
        assert!(!ndfa.accepts(&chars("abcd")));
    }

    #[test]
    fn concat_of_hand_built_machines() {
        let ndfa = concat(&a_b_loop(), &c_d());

        assert!(ndfa.accepts(&chars("abcd")));
        assert!(ndfa.accepts(&chars("babbababbabbabaaabababcd")));
        assert!(!ndfa.accepts(&chars("cd")));
        assert!(!ndfa.accepts(&chars("ab")));
    }

    #[test]
    fn star_of_hand_built_machine() {
        let ndfa = kleene_star(&c_d());

        assert!(ndfa.accepts(&chars("")));
        assert!(ndfa.accepts(&chars("cd")));
        assert!(ndfa.accepts(&chars("cdcd")));
        assert!(ndfa.accepts(&chars("cdcdcd")));
        assert!(!ndfa.accepts(&chars("cdc")));
        assert!(!ndfa.accepts(&chars("test")));
    }

    #[test]
    fn failing_at_end_of_input_keeps_searching() {
        // The first context popped at the end of the input is not accepting, but a later one is
        let mut ndfa = Ndfa::new(0);

        ndfa.add_transition(0, Label::Symbol('a'), 1);
        ndfa.add_transition(0, Label::Symbol('a'), 2);
        ndfa.set_accepting(1);

        assert!(ndfa.accepts(&chars("a")));
    }

    #[test]
    fn nested_stars_terminate() {
        let ndfa = literal('a').star().star().to_ndfa();

        assert!(ndfa.accepts(&chars("")));
        assert!(ndfa.accepts(&chars("aaaa")));
        assert!(!ndfa.accepts(&chars("aab")));
        assert!(!ndfa.accepts(&chars("b")));
    }

    #[test]
    fn epsilon_moves_are_bounded() {
        let ndfa        = literal('a').star().star().star().to_ndfa();
        let epsilons    = ndfa.transitions().iter().filter(|transition| transition.label.is_epsilon()).count();

        for input in &["", "a", "aaaaaa", "aaab", "b"] {
            let input           = chars(input);
            let (_, stats)      = execute_with_stats(&ndfa, &input);

            assert!(stats.epsilon_moves <= epsilons * (input.len() + 1));
        }
    }

    #[test]
    fn stats_count_work_done() {
        let ndfa                = literal('a').to_ndfa();
        let (accepted, stats)   = execute_with_stats(&ndfa, &chars("a"));

        assert!(accepted);
        assert!(stats == SearchStats { contexts_visited: 2, epsilon_moves: 0, symbol_moves: 1 });
    }

    #[test]
    fn machine_can_be_shared_between_threads() {
        use std::sync::Arc;
        use std::thread;

        let ndfa    = Arc::new(literal('a').or(literal('b')).star().to_ndfa());
        let workers = (0..4).map(|_| {
            let ndfa = Arc::clone(&ndfa);
            thread::spawn(move || ndfa.accepts(&chars("abab")) && !ndfa.accepts(&chars("abc")))
        }).collect::<Vec<_>>();

        for worker in workers {
            assert!(worker.join().unwrap());
        }
    }

    ///
    /// A machine that reports fewer states than its transitions use
    ///
    struct UnderCounted(Ndfa<char>);

    impl StateMachine<char> for UnderCounted {
        fn count_states(&self) -> StateId { 1 }
        fn start_state(&self) -> StateId { self.0.start_state() }
        fn is_accepting(&self, state: StateId) -> bool { self.0.is_accepting(state) }
        fn transitions(&self) -> &[Transition<char>] { self.0.transitions() }
    }

    #[test]
    fn state_count_is_not_trusted() {
        let machine = UnderCounted(c_d());

        assert!(execute(&machine, &chars("cd")));
        assert!(!execute(&machine, &chars("c")));
    }

    #[test]
    fn works_through_trait_object() {
        let ndfa                                = c_d();
        let machine: &dyn StateMachine<char>    = &ndfa;

        assert!(execute(machine, &chars("cd")));
    }
}
