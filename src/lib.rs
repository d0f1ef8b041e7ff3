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
//! # Thompson
//!
//! Thompson is a library for building non-deterministic finite automata from regular expressions, and for matching strings
//! against them.
//!
//! Expressions are lowered into NDFAs one operator at a time using Thompson's construction (`union`, `concat` and
//! `kleene_star`). The resulting machines are matched by a backtracking search that is guaranteed to finish even when the
//! machine contains cycles of epsilon transitions.
//!
//! ```
//! # use thompson::*;
//! assert!(matches("ab*c", "abbbc"));
//!
//! let multiples_of_three = compile("(0|(1(01*(00)*0)*1)*)*").unwrap();
//! assert!(multiples_of_three.matches("1111"));
//! assert!(!multiples_of_three.matches("10000"));
//! ```
//!

pub use self::state_machine::*;
pub use self::ndfa::*;
pub use self::combinators::*;
pub use self::regular_pattern::*;
pub use self::parser::*;
pub use self::machine_builder::*;
pub use self::backtracking_matcher::*;
pub use self::matches::*;

pub mod state_machine;
pub mod ndfa;
pub mod combinators;
pub mod regular_pattern;
pub mod parser;
pub mod machine_builder;
pub mod backtracking_matcher;
pub mod matches;
