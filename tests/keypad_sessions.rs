//! End-to-end keypad sessions.

use keypad_calc::core::{evaluate, Operator};
use keypad_calc::{format_value, Calculator, CalculatorState, Key};

fn session(labels: &[&str]) -> Calculator {
    let mut calculator = Calculator::new();
    let keys: Vec<Key> = labels.iter().map(|label| label.parse().unwrap()).collect();
    calculator.press_all(keys);
    calculator
}

#[test]
fn addition_leaves_result_ready_to_overwrite() {
    let calculator = session(&["2", "+", "3", "="]);
    let state = calculator.state();

    assert_eq!(state.current_value, "5");
    assert_eq!(state.previous_value, "");
    assert_eq!(state.operation, None);
    assert!(state.should_overwrite);
}

#[test]
fn typing_after_result_starts_fresh() {
    let calculator = session(&["2", "+", "3", "=", "7"]);
    assert_eq!(calculator.state().current_value, "7");
    assert!(!calculator.state().should_overwrite);
}

#[test]
fn operator_after_result_carries_it_forward() {
    let calculator = session(&["2", "+", "3", "=", "*", "4", "="]);
    assert_eq!(calculator.state().current_value, "20");
}

#[test]
fn repeated_operation_evaluates_eagerly() {
    let calculator = session(&["1", "0", "+", "5", "*"]);
    let state = calculator.state();

    assert_eq!(state.previous_value, "15");
    assert_eq!(state.operation, Some(Operator::Multiply));
    assert_eq!(state.current_value, "");
}

#[test]
fn division_by_zero_shows_infinity() {
    let calculator = session(&["5", "/", "0", "="]);
    assert_eq!(calculator.display().main, "Infinity");
    assert_eq!(evaluate("5", "0", "/"), "Infinity");
}

#[test]
fn clear_from_any_state() {
    for labels in [
        vec!["1", "2"],
        vec!["1", "+"],
        vec!["1", "+", "2", "="],
        vec!["1", "+", "2", "-"],
    ] {
        let mut calculator = session(&labels);
        calculator.press(Key::Clear);
        assert_eq!(calculator.state(), &CalculatorState::new());
    }
}

#[test]
fn delete_repeatedly() {
    let mut calculator = session(&["1", "2", "3"]);
    let mut seen = Vec::new();
    for _ in 0..4 {
        calculator.press(Key::Delete);
        seen.push(calculator.state().current_value.clone());
    }
    assert_eq!(seen, ["12", "1", "", ""]);
}

#[test]
fn display_groups_both_lines() {
    let calculator = session(&["1", "2", "5", "0", "0", "-", "2", "5", "0", "0", ".", "5"]);
    let display = calculator.display();

    assert_eq!(display.preview, "12,500 -");
    assert_eq!(display.main, "2,500.5");
}

#[test]
fn formatting_examples() {
    assert_eq!(format_value("2500"), "2,500");
    assert_eq!(format_value("2500.5"), "2,500.5");
    assert_eq!(format_value(""), "");
}

#[test]
fn invalid_operand_silently_empties_the_value() {
    let calculator = session(&["5", "+", ".", "="]);
    assert_eq!(calculator.state().current_value, "");
    assert_eq!(calculator.display().main, "");
}
