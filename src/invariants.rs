//! Invariant checks for calculator state using Validation.
//!
//! Every rule is evaluated and ALL violations are returned together, rather
//! than stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::core::CalculatorState;
//! use keypad_calc::invariants::check_invariants;
//!
//! let broken = CalculatorState {
//!     current_value: "01.2.3".to_string(),
//!     ..CalculatorState::new()
//! };
//! assert!(check_invariants(&broken).is_failure());
//! assert!(check_invariants(&CalculatorState::new()).is_success());
//! ```

use crate::core::CalculatorState;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A broken calculator-state invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Value '{value}' contains more than one decimal point")]
    MultipleDecimalPoints { value: String },

    #[error("Value '{value}' has a redundant leading zero")]
    RedundantLeadingZero { value: String },

    #[error("Operand '{value}' is captured but no operation is pending")]
    OperandWithoutOperator { value: String },
}

pub type InvariantCheck = Validation<(), NonEmptyVec<InvariantViolation>>;

/// Check every state invariant, accumulating all violations.
///
/// Digit-entry rules only apply to a typed value; while the overwrite flag is
/// set `current_value` holds a computed result and is exempt.
pub fn check_invariants(state: &CalculatorState) -> InvariantCheck {
    let mut checks: Vec<InvariantCheck> = Vec::new();

    if !state.should_overwrite {
        checks.push(single_decimal_point(&state.current_value));
        checks.push(no_redundant_leading_zero(&state.current_value));
    }
    checks.push(operand_has_operator(state));

    Validation::all_vec(checks).map(|_| ())
}

fn single_decimal_point(value: &str) -> InvariantCheck {
    if value.matches('.').count() > 1 {
        Validation::fail(InvariantViolation::MultipleDecimalPoints {
            value: value.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn no_redundant_leading_zero(value: &str) -> InvariantCheck {
    let integer = value.split('.').next().unwrap_or_default();
    if integer.len() > 1 && integer.starts_with('0') {
        Validation::fail(InvariantViolation::RedundantLeadingZero {
            value: value.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn operand_has_operator(state: &CalculatorState) -> InvariantCheck {
    if !state.previous_value.is_empty() && state.operation.is_none() {
        Validation::fail(InvariantViolation::OperandWithoutOperator {
            value: state.previous_value.clone(),
        })
    } else {
        Validation::success(())
    }
}
