//! In-memory transition trail.
//!
//! Tracks calculator state changes over a session. The trail lives only as
//! long as its owner, is never written anywhere, and keeps at most `limit`
//! entries, dropping the oldest first.

use super::action::Action;
use super::state::CalculatorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Entries kept by [`StateHistory::new`].
pub const DEFAULT_TRAIL_LIMIT: usize = 1024;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{Action, CalculatorState, StateTransition};
/// use chrono::Utc;
///
/// let from = CalculatorState::new();
/// let to = CalculatorState {
///     current_value: "7".to_string(),
///     ..CalculatorState::new()
/// };
///
/// let transition = StateTransition {
///     from,
///     to,
///     action: Action::AddDigit('7'),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.current_value, "7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state before the action
    pub from: CalculatorState,
    /// The state after the action
    pub to: CalculatorState,
    /// The action that caused the change
    pub action: Action,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered trail of state changes.
///
/// `push` appends in place and evicts the oldest entry once `limit` is
/// reached. `record` is the non-mutating form: it returns a new history and
/// leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{transition, Action, CalculatorState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let start = CalculatorState::new();
/// let typed = transition(&start, Action::AddDigit('4'));
///
/// let mut history = StateHistory::new();
/// history.push(StateTransition {
///     from: start,
///     to: typed,
///     action: Action::AddDigit('4'),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1].current_value, "4");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    limit: usize,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_TRAIL_LIMIT)
    }

    /// Create a history keeping at most `limit` entries. A limit of zero
    /// records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_TRAIL_LIMIT)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a transition in place, evicting the oldest once full.
    pub fn push(&mut self, transition: StateTransition) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Record a transition, returning a new history.
    ///
    /// Copies the whole trail; owners that append repeatedly use [`push`](Self::push).
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// States traversed: the oldest kept `from` state, then each `to` state.
    pub fn get_path(&self) -> Vec<&CalculatorState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Actions applied, in order.
    pub fn actions(&self) -> Vec<Action> {
        self.transitions.iter().map(|t| t.action).collect()
    }

    /// Time between the oldest and newest kept change, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
