//! Inputs accepted by the calculator state engine.

use super::state::Operator;
use serde::{Deserialize, Serialize};

/// A single engine input. Each keypad press maps to exactly one action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Action {
    /// Append a digit `0`-`9` or the decimal point `.`.
    AddDigit(char),
    /// Remove the last typed character.
    DeleteLastDigit,
    /// Select the pending binary operator.
    ChooseOperation(Operator),
    /// The `=` key.
    Evaluate,
    /// Reset to the initial state.
    Clear,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "AddDigit",
            Self::DeleteLastDigit => "DeleteLastDigit",
            Self::ChooseOperation(_) => "ChooseOperation",
            Self::Evaluate => "Evaluate",
            Self::Clear => "Clear",
        }
    }
}
