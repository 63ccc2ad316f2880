//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The `CalculatorState` value and the `Action` inputs it reacts to
//! - The `transition` reducer
//! - Two-operand evaluation with lenient operand parsing
//! - Bounded transition history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod evaluate;
mod history;
mod state;
mod transition;

pub use action::Action;
pub use evaluate::{evaluate, evaluate_with, parse_leading_number, to_canonical_string};
pub use history::{StateHistory, StateTransition, DEFAULT_TRAIL_LIMIT};
pub use state::{CalculatorState, Operator, Phase};
pub use transition::transition;
