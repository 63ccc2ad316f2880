//! Calculator state value and its operator type.
//!
//! State is an immutable value: every action produces a new instance via
//! [`transition`](super::transition). Nothing in this module has side effects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary arithmetic operators on the keypad.
///
/// Serializes as its symbol so a state dump reads the way the keypad does.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::Operator;
///
/// assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
/// assert_eq!(Operator::Divide.symbol(), "/");
/// assert_eq!(Operator::from_symbol("%"), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Add,
        Operator::Subtract,
    ];

    /// Symbol shown on the button and in the preview line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parse an operator symbol. Only the four keypad symbols are recognized.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields infinity or NaN rather than failing.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Coarse, derived name for where a calculator state sits in its lifecycle.
///
/// Used for logging and the transition trail; never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing typed, nothing pending.
    Empty,
    /// Digits are being typed with no operator pending.
    Entering,
    /// An operand and operator are captured, waiting for the second operand.
    OperatorPending,
    /// An evaluation just completed; the next digit replaces the value.
    ShowingResult,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Entering => "Entering",
            Self::OperatorPending => "OperatorPending",
            Self::ShowingResult => "ShowingResult",
        }
    }
}

/// The complete calculator state.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert!(state.current_value.is_empty());
/// assert!(state.previous_value.is_empty());
/// assert_eq!(state.operation, None);
/// assert!(!state.should_overwrite);
/// assert_eq!(state.phase(), Phase::Empty);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Digits typed since the last operator, evaluate or clear. Empty means nothing typed.
    pub current_value: String,
    /// Operand captured before the pending operator. Empty means none.
    pub previous_value: String,
    /// Pending binary operator, if any.
    pub operation: Option<Operator>,
    /// Set right after an evaluation: the next digit replaces `current_value`.
    pub should_overwrite: bool,
}

impl CalculatorState {
    /// The initial state: all fields empty, overwrite flag clear.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.operation.is_some() && !self.previous_value.is_empty() {
            Phase::OperatorPending
        } else if self.should_overwrite {
            Phase::ShowingResult
        } else if self.current_value.is_empty() && self.previous_value.is_empty() {
            Phase::Empty
        } else {
            Phase::Entering
        }
    }

    /// Operator symbol as the keypad shows it, or `""` when none is pending.
    pub fn operation_symbol(&self) -> &'static str {
        self.operation.map_or("", Operator::symbol)
    }
}
