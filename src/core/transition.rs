//! The pure state-transition function.
//!
//! `transition` maps `(state, action)` to the next state. It is total: inputs
//! that make no sense in the current state return an unchanged copy.

use super::action::Action;
use super::evaluate::evaluate_with;
use super::state::{CalculatorState, Operator};

/// Compute the next state for `action`. The input state is never modified.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{transition, Action, CalculatorState, Operator};
///
/// let state = [
///     Action::AddDigit('2'),
///     Action::ChooseOperation(Operator::Add),
///     Action::AddDigit('3'),
///     Action::Evaluate,
/// ]
/// .into_iter()
/// .fold(CalculatorState::new(), |state, action| transition(&state, action));
///
/// assert_eq!(state.current_value, "5");
/// assert!(state.should_overwrite);
/// ```
pub fn transition(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::DeleteLastDigit => delete_last_digit(state),
        Action::ChooseOperation(operator) => choose_operation(state, operator),
        Action::Evaluate => evaluate_pending(state),
        Action::Clear => CalculatorState::new(),
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !(digit.is_ascii_digit() || digit == '.') {
        return state.clone();
    }

    if state.should_overwrite {
        return CalculatorState {
            current_value: digit.to_string(),
            should_overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_value.as_str();
    if current == "0" && digit == '0' {
        return state.clone();
    }
    if digit == '.' && current.contains('.') {
        return state.clone();
    }

    let current_value = if current == "0" && digit != '.' {
        digit.to_string()
    } else {
        format!("{current}{digit}")
    };

    CalculatorState {
        current_value,
        ..state.clone()
    }
}

fn delete_last_digit(state: &CalculatorState) -> CalculatorState {
    if state.should_overwrite {
        return CalculatorState {
            current_value: String::new(),
            should_overwrite: false,
            ..state.clone()
        };
    }

    let mut next = state.clone();
    next.current_value.pop();
    next
}

fn choose_operation(state: &CalculatorState, operator: Operator) -> CalculatorState {
    match (
        state.previous_value.is_empty(),
        state.current_value.is_empty(),
    ) {
        (true, true) => state.clone(),
        (true, false) => CalculatorState {
            previous_value: state.current_value.clone(),
            current_value: String::new(),
            operation: Some(operator),
            ..state.clone()
        },
        (false, true) => CalculatorState {
            operation: Some(operator),
            ..state.clone()
        },
        (false, false) => CalculatorState {
            previous_value: evaluate_with(
                &state.previous_value,
                &state.current_value,
                state.operation,
            ),
            current_value: String::new(),
            operation: Some(operator),
            should_overwrite: true,
        },
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        current_value: evaluate_with(&state.previous_value, &state.current_value, state.operation),
        previous_value: String::new(),
        operation: None,
        should_overwrite: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::new(), |state, action| {
                transition(&state, *action)
            })
    }

    fn typed(value: &str) -> CalculatorState {
        CalculatorState {
            current_value: value.to_string(),
            ..CalculatorState::default()
        }
    }

    #[test]
    fn digits_accumulate() {
        let state = run(&[
            Action::AddDigit('1'),
            Action::AddDigit('2'),
            Action::AddDigit('.'),
            Action::AddDigit('0'),
            Action::AddDigit('5'),
        ]);
        assert_eq!(state.current_value, "12.05");
    }

    #[test]
    fn second_leading_zero_is_rejected() {
        let state = typed("0");
        assert_eq!(transition(&state, Action::AddDigit('0')), state);
    }

    #[test]
    fn lone_zero_is_replaced_by_a_nonzero_digit() {
        let state = transition(&typed("0"), Action::AddDigit('7'));
        assert_eq!(state.current_value, "7");
    }

    #[test]
    fn zero_then_point_keeps_the_zero() {
        let state = transition(&typed("0"), Action::AddDigit('.'));
        assert_eq!(state.current_value, "0.");
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let state = typed("3.1");
        assert_eq!(transition(&state, Action::AddDigit('.')), state);
    }

    #[test]
    fn non_digit_characters_are_ignored() {
        let state = typed("3");
        assert_eq!(transition(&state, Action::AddDigit('x')), state);
    }

    #[test]
    fn digit_after_result_overwrites() {
        let state = CalculatorState {
            current_value: "5".to_string(),
            should_overwrite: true,
            ..CalculatorState::default()
        };
        let next = transition(&state, Action::AddDigit('9'));
        assert_eq!(next.current_value, "9");
        assert!(!next.should_overwrite);
    }

    #[test]
    fn delete_walks_back_to_empty() {
        let mut state = typed("123");
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = transition(&state, Action::DeleteLastDigit);
            seen.push(state.current_value.clone());
        }
        assert_eq!(seen, vec!["12", "1", "", ""]);
    }

    #[test]
    fn delete_after_result_discards_it() {
        let state = CalculatorState {
            current_value: "42".to_string(),
            should_overwrite: true,
            ..CalculatorState::default()
        };
        let next = transition(&state, Action::DeleteLastDigit);
        assert_eq!(next.current_value, "");
        assert!(!next.should_overwrite);
    }

    #[test]
    fn operator_on_empty_state_is_ignored() {
        let state = CalculatorState::new();
        assert_eq!(
            transition(&state, Action::ChooseOperation(Operator::Add)),
            state
        );
    }

    #[test]
    fn operator_captures_current_value() {
        let state = transition(&typed("12"), Action::ChooseOperation(Operator::Subtract));
        assert_eq!(state.previous_value, "12");
        assert_eq!(state.current_value, "");
        assert_eq!(state.operation, Some(Operator::Subtract));
    }

    #[test]
    fn operator_can_be_changed() {
        let state = run(&[
            Action::AddDigit('4'),
            Action::ChooseOperation(Operator::Add),
            Action::ChooseOperation(Operator::Divide),
        ]);
        assert_eq!(state.previous_value, "4");
        assert_eq!(state.operation, Some(Operator::Divide));
        assert_eq!(state.current_value, "");
    }

    #[test]
    fn repeated_operation_chains_evaluation() {
        let state = CalculatorState {
            current_value: "5".to_string(),
            previous_value: "10".to_string(),
            operation: Some(Operator::Add),
            should_overwrite: false,
        };
        let next = transition(&state, Action::ChooseOperation(Operator::Multiply));
        assert_eq!(next.previous_value, "15");
        assert_eq!(next.operation, Some(Operator::Multiply));
        assert_eq!(next.current_value, "");
        assert!(next.should_overwrite);
    }

    #[test]
    fn evaluate_completes_expression() {
        let state = CalculatorState {
            current_value: "3".to_string(),
            previous_value: "2".to_string(),
            operation: Some(Operator::Add),
            should_overwrite: false,
        };
        let next = transition(&state, Action::Evaluate);
        assert_eq!(
            next,
            CalculatorState {
                current_value: "5".to_string(),
                previous_value: String::new(),
                operation: None,
                should_overwrite: true,
            }
        );
    }

    #[test]
    fn evaluate_without_operands_clears_the_value() {
        let next = transition(&typed("5"), Action::Evaluate);
        assert_eq!(next.current_value, "");
        assert!(next.should_overwrite);
    }

    #[test]
    fn evaluate_division_by_zero() {
        let state = run(&[
            Action::AddDigit('5'),
            Action::ChooseOperation(Operator::Divide),
            Action::AddDigit('0'),
            Action::Evaluate,
        ]);
        assert_eq!(state.current_value, "Infinity");
    }

    #[test]
    fn clear_resets_everything() {
        let state = CalculatorState {
            current_value: "3".to_string(),
            previous_value: "2".to_string(),
            operation: Some(Operator::Add),
            should_overwrite: true,
        };
        assert_eq!(transition(&state, Action::Clear), CalculatorState::new());
    }

    #[test]
    fn transition_does_not_mutate_input() {
        let state = typed("12");
        let before = state.clone();
        let _ = transition(&state, Action::AddDigit('3'));
        assert_eq!(state, before);
    }
}
