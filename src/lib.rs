//! keypad-calc: a pure functional four-function calculator engine
//!
//! The calculator follows a "pure core, imperative shell" design. The core is
//! a total state-transition function over an immutable [`CalculatorState`];
//! the shell is a [`Calculator`] session that owns one state, applies keypad
//! presses and renders the display.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds the typed value, the captured operand,
//!   the pending operator and the overwrite flag
//! - **Actions**: `Action` is the closed set of engine inputs
//! - **Transition**: `transition(&state, action)` computes the next state
//! - **Evaluation**: invalid operands degrade to an empty result, never an error
//! - **Display**: grouped formatting for the preview and main lines
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::core::{transition, Action, CalculatorState, Operator};
//! use keypad_calc::display::format_value;
//!
//! let state = CalculatorState::new();
//! let state = transition(&state, Action::AddDigit('2'));
//! let state = transition(&state, Action::AddDigit('5'));
//! let state = transition(&state, Action::ChooseOperation(Operator::Multiply));
//! let state = transition(&state, Action::AddDigit('1'));
//! let state = transition(&state, Action::AddDigit('0'));
//! let state = transition(&state, Action::AddDigit('0'));
//! let state = transition(&state, Action::Evaluate);
//!
//! assert_eq!(state.current_value, "2500");
//! assert_eq!(format_value(&state.current_value), "2,500");
//! ```

pub mod core;
pub mod display;
pub mod invariants;
pub mod keypad;
pub mod session;

// Re-export commonly used types
pub use crate::core::{transition, Action, CalculatorState, Operator};
pub use display::{format_value, Display, DisplayConfig};
pub use keypad::{Digit, Key, KeyError};
pub use session::Calculator;
