use deskcalc::{action, CalcError};

use super::queued_calc;

#[test]
fn given_queued_events_when_processed_should_apply_in_order() {
    let (mut dispatcher, handle, display) = queued_calc();

    handle.press_digit('6');
    handle.press_action(action::DIVIDE);
    handle.press_digit('3');
    handle.press_action(action::EQUAL);

    dispatcher.process_pending().unwrap();

    assert_eq!(dispatcher.calc().first_operand(), "2");
    assert_eq!(display.last().as_deref(), Some("2"));
}

#[test]
fn given_cloned_handles_should_feed_the_same_queue() {
    let (mut dispatcher, handle, _display) = queued_calc();
    let second_handle = handle.clone();

    handle.press_digit('1');
    second_handle.press_digit('2');

    dispatcher.process_pending().unwrap();

    assert_eq!(dispatcher.calc().first_operand(), "12");
}

#[test]
fn given_a_value_press_should_replace_the_active_operand() {
    let (mut dispatcher, handle, _display) = queued_calc();

    handle.press_digit('1');
    handle.press_value("42");

    dispatcher.process_pending().unwrap();

    assert_eq!(dispatcher.calc().first_operand(), "42");
}

#[test]
fn given_an_undefined_action_press_should_fail_processing() {
    let (mut dispatcher, handle, _display) = queued_calc();

    handle.press_digit('5');
    handle.press_action(999);

    let err = dispatcher.process_pending().unwrap_err();

    assert_eq!(err, CalcError::UndefinedAction(999));
    // Events up to the fault were applied; the faulty one changed nothing.
    assert_eq!(dispatcher.calc().first_operand(), "5");
}

#[test]
fn given_all_handles_dropped_run_should_drain_and_return() {
    let (mut dispatcher, handle, display) = queued_calc();

    handle.press_digit('5');
    handle.press_action(action::ADD);
    handle.press_digit('3');
    handle.press_action(action::EQUAL);
    drop(handle);

    dispatcher.run().unwrap();

    assert_eq!(dispatcher.calc().first_operand(), "8");
    assert_eq!(display.last().as_deref(), Some("8"));
}
