//! Calculator session: the imperative shell around the pure core.
//!
//! A [`Calculator`] owns exactly one [`CalculatorState`], applies actions
//! through [`transition`], and keeps an in-memory trail of the changes.

use crate::core::{transition, Action, CalculatorState, StateHistory, StateTransition};
use crate::display::{Display, DisplayConfig};
use crate::invariants::check_invariants;
use crate::keypad::Key;
use chrono::Utc;
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

/// A calculator session owning one state instance.
///
/// # Example
///
/// ```rust
/// use keypad_calc::keypad::Key;
/// use keypad_calc::session::Calculator;
///
/// let mut calculator = Calculator::new();
/// let keys: Vec<Key> = ["2", "5", "0", "0", "+", "5"]
///     .iter()
///     .map(|label| label.parse().unwrap())
///     .collect();
/// calculator.press_all(keys);
///
/// let display = calculator.display();
/// assert_eq!(display.preview, "2,500 +");
/// assert_eq!(display.main, "5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: DisplayConfig,
    history: StateHistory,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that renders with the given display settings.
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Keep at most `limit` entries in the transition trail.
    pub fn with_trail_limit(mut self, limit: usize) -> Self {
        self.history = StateHistory::with_limit(limit);
        self
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Transition trail (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Apply one action and return the resulting state.
    ///
    /// Only actions that change the state are recorded in the trail.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = transition(&self.state, action);

        if next == self.state {
            trace!(action = action.name(), "action left state unchanged");
            return &self.state;
        }

        if let Validation::Failure(violations) = check_invariants(&next) {
            for violation in violations.iter() {
                warn!(action = action.name(), %violation, "calculator invariant violated");
            }
        }

        debug!(
            action = action.name(),
            from = self.state.phase().name(),
            to = next.phase().name(),
            current = %next.current_value,
            previous = %next.previous_value,
            operation = next.operation_symbol(),
            "calculator transition"
        );

        let record = StateTransition {
            from: std::mem::replace(&mut self.state, next),
            to: self.state.clone(),
            action,
            timestamp: Utc::now(),
        };
        self.history.push(record);

        &self.state
    }

    /// Press one keypad button.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        self.dispatch(key.action())
    }

    /// Press a sequence of buttons in order.
    pub fn press_all<I>(&mut self, keys: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        &self.state
    }

    /// Render both display lines for the current state.
    pub fn display(&self) -> Display {
        Display::render(&self.state, &self.config)
    }

    /// Return to the initial state (the `AC` key).
    pub fn reset(&mut self) -> &CalculatorState {
        self.dispatch(Action::Clear)
    }
}
