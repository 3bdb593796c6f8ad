//! Input-event plumbing between a host's button wiring and the state
//! machine.
//!
//! The state machine itself holds no per-button bindings. A host creates
//! a [`Dispatcher`] around a [`Calc`] and hands clones of the returned
//! [`InputHandle`] to its input wiring; a handle clone is the stable,
//! reusable reference a host caches when it needs to unwire a control
//! later.

use flume::{Receiver, Sender};
use tracing::trace;

use crate::action::ActionId;
use crate::calc::Calc;
use crate::display::DisplaySink;
use crate::error::CalcError;

/// One key press, as delivered by the host's input wiring.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A digit or decimal-point key, appended to the active operand.
    Digit(char),
    /// Replace the active operand outright (paste, preset keys).
    Value(String),
    /// An action key, by id.
    Action(ActionId),
}

/// Cheap-to-clone sender half of the input queue.
///
/// Sending never blocks and never fails visibly; events queued after the
/// [`Dispatcher`] is gone are simply dropped.
pub struct InputHandle(Sender<InputEvent>);

impl Clone for InputHandle {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl InputHandle {
    pub fn press_digit(&self, token: char) {
        self.send(InputEvent::Digit(token));
    }

    pub fn press_value(&self, value: impl Into<String>) {
        self.send(InputEvent::Value(value.into()));
    }

    pub fn press_action(&self, id: ActionId) {
        self.send(InputEvent::Action(id));
    }

    pub fn send(&self, event: InputEvent) {
        self.0.send(event).ok();
    }
}

/// Applies queued input events to a [`Calc`], strictly in order.
///
/// Each event maps to one atomic state transition followed by one render;
/// there is no batching and no reordering.
pub struct Dispatcher<D: DisplaySink> {
    calc: Calc<D>,
    receiver: Receiver<InputEvent>,
}

impl<D: DisplaySink> Dispatcher<D> {
    /// Wrap a calculator in a dispatcher and return the paired handle.
    pub fn new(calc: Calc<D>) -> (Self, InputHandle) {
        let (sender, receiver) = flume::unbounded();
        (Dispatcher { calc, receiver }, InputHandle(sender))
    }

    /// Block on the queue until every [`InputHandle`] is dropped.
    ///
    /// Stops at the first undefined action id: that is a wiring bug, not
    /// a user error, and is propagated rather than swallowed.
    pub fn run(&mut self) -> Result<(), CalcError> {
        while let Ok(event) = self.receiver.recv() {
            self.apply(event)?;
        }
        Ok(())
    }

    /// Drain and apply the events queued so far, then return.
    pub fn process_pending(&mut self) -> Result<(), CalcError> {
        while let Ok(event) = self.receiver.try_recv() {
            self.apply(event)?;
        }
        Ok(())
    }

    fn apply(&mut self, event: InputEvent) -> Result<(), CalcError> {
        trace!(?event, "applying input event");
        match event {
            InputEvent::Digit(token) => self.calc.enter_digit(token),
            InputEvent::Value(value) => self.calc.set_operand(&value),
            InputEvent::Action(id) => {
                self.calc.select_action(id)?;
            }
        }
        Ok(())
    }

    pub fn calc(&self) -> &Calc<D> {
        &self.calc
    }

    pub fn calc_mut(&mut self) -> &mut Calc<D> {
        &mut self.calc
    }
}
