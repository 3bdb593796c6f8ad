use deskcalc::{action, Calc, TestDisplay};

fn setup_calc() -> (Calc<TestDisplay>, TestDisplay) {
    let display = TestDisplay::new();
    let calc = Calc::new(display.clone());
    (calc, display)
}

#[test]
fn given_divide_then_square_root_scenario_should_match_expected_displays() {
    let (mut calc, display) = setup_calc();

    calc.enter_digit('6');
    calc.select_action(action::DIVIDE).unwrap();
    calc.enter_digit('3');
    assert_eq!(calc.select_action(action::EQUAL).unwrap(), Some(2.0));
    assert_eq!(display.last().as_deref(), Some("2"));

    calc.set_operand("9");
    assert_eq!(calc.select_action(action::SQUARE_ROOT).unwrap(), Some(3.0));
    assert_eq!(display.last().as_deref(), Some("3"));
}

#[test]
fn given_a_computed_unary_result_when_equal_selected_should_replay_the_unary() {
    let (mut calc, _display) = setup_calc();

    calc.enter_digit('9');
    calc.select_action(action::SQUARE_ROOT).unwrap();

    let replayed = calc.select_action(action::EQUAL).unwrap().unwrap();

    assert!((replayed - 3f64.sqrt()).abs() < 1e-12);
}

#[test]
fn given_memory_of_a_missing_second_operand_when_replayed_should_produce_nan() {
    let (mut calc, _display) = setup_calc();

    calc.enter_digit('5');
    calc.select_action(action::ADD).unwrap();

    // First equals coerces the missing operand to zero.
    assert_eq!(calc.select_action(action::EQUAL).unwrap(), Some(5.0));

    // The memory of a missing operand replays as NaN, not as zero.
    let replayed = calc.select_action(action::EQUAL).unwrap().unwrap();
    assert!(replayed.is_nan());
}

#[test]
fn given_a_new_second_operand_between_equals_should_update_the_memory() {
    let (mut calc, _display) = setup_calc();

    calc.enter_digit('2');
    calc.select_action(action::MULTIPLY).unwrap();
    calc.enter_digit('3');
    assert_eq!(calc.select_action(action::EQUAL).unwrap(), Some(6.0));

    calc.select_action(action::MULTIPLY).unwrap();
    calc.enter_digit('2');
    assert_eq!(calc.select_action(action::EQUAL).unwrap(), Some(12.0));

    // Replay now repeats "* 2", not "* 3".
    assert_eq!(calc.select_action(action::EQUAL).unwrap(), Some(24.0));
}
