//! The calculator state machine.

use tracing::{debug, warn};

use crate::action::{self, find_action, ActionId, EQUAL};
use crate::display::DisplaySink;
use crate::error::CalcError;

/// Seeds applied when the state machine is reset.
///
/// [`Calc::compute_result`] resets through this after a computation,
/// carrying the result into the first operand and the just-used action
/// into the replay memory. A plain clear uses the default (everything
/// empty, memory idle).
#[derive(Clone, Debug)]
pub struct ClearSeed {
    /// Initial content of the first operand buffer.
    pub result: String,
    /// Remembered second operand for equals replay.
    pub second: String,
    /// Remembered action id for equals replay.
    pub action: ActionId,
}

impl Default for ClearSeed {
    fn default() -> Self {
        Self {
            result: String::new(),
            second: String::new(),
            action: EQUAL,
        }
    }
}

struct LastOp {
    action: ActionId,
    second: String,
}

/// Two-operand calculator state machine bound to a display sink.
///
/// Owns the operand buffers, the pending action and the last-operation
/// memory. Every public mutating operation ends with exactly one render
/// into the bound [`DisplaySink`].
///
/// Digits accumulate into the first operand while idle and into the
/// second once an action is pending; `pending == EQUAL` is the idle
/// state. See the [crate-level documentation](crate) for a worked
/// example.
pub struct Calc<D: DisplaySink> {
    display: D,
    first: String,
    second: String,
    pending: ActionId,
    last: LastOp,
}

impl<D: DisplaySink> Calc<D> {
    /// Create an idle calculator and render the (empty) initial text.
    pub fn new(display: D) -> Self {
        let mut calc = Calc {
            display,
            first: String::new(),
            second: String::new(),
            pending: EQUAL,
            last: LastOp {
                action: EQUAL,
                second: String::new(),
            },
        };
        calc.render();
        calc
    }

    /// Append a digit or decimal-point character to the active operand.
    ///
    /// No well-formedness check happens here; a buffer like `1.2.3`
    /// converts to `NaN` at compute time and flows through unflagged.
    pub fn enter_digit(&mut self, token: char) {
        self.active_buffer().push(token);
        self.render();
    }

    /// Replace the active operand outright.
    pub fn set_operand(&mut self, value: &str) {
        let buffer = self.active_buffer();
        buffer.clear();
        buffer.push_str(value);
        self.render();
    }

    // First operand while idle, second while an action is pending.
    fn active_buffer(&mut self) -> &mut String {
        if self.pending == EQUAL {
            &mut self.first
        } else {
            &mut self.second
        }
    }

    /// Select an action by id.
    ///
    /// [`CLEAR`](action::CLEAR) resets, [`EQUAL`](action::EQUAL) computes,
    /// a binary action becomes pending, a unary action computes
    /// immediately. An id absent from the action table fails with
    /// [`CalcError::UndefinedAction`] and leaves the state untouched.
    ///
    /// Returns the computed value when the selection resolved into a
    /// computation.
    pub fn select_action(&mut self, id: ActionId) -> Result<Option<f64>, CalcError> {
        if id == action::CLEAR {
            self.clear();
            return Ok(None);
        }
        if id == EQUAL {
            return Ok(self.compute_result());
        }

        let Some(def) = find_action(id) else {
            warn!(id, "action id not present in the action table");
            return Err(CalcError::UndefinedAction(id));
        };

        debug!(id, "action selected");
        self.pending = id;

        if def.unary {
            return Ok(self.compute_result());
        }
        self.render();
        Ok(None)
    }

    /// Resolve the pending operation, or replay the last completed one.
    ///
    /// While an action is pending it is applied to (first, second); unary
    /// actions ignore the second operand. While idle, the last completed
    /// action is replayed against (first, remembered second) so repeated
    /// equals repeats the operation against the latest result; with no
    /// memory this is a no-op returning `None`.
    ///
    /// On success the stringified result seeds the first operand, the
    /// action and second operand are remembered, and the machine returns
    /// to idle.
    pub fn compute_result(&mut self) -> Option<f64> {
        let first = to_number(&self.first);
        let mut second = to_number(&self.second);
        let mut id = self.pending;

        if self.pending == EQUAL {
            if self.last.action == EQUAL {
                // Equals pressed before anything was ever computed.
                return None;
            }
            id = self.last.action;
            second = to_number(&self.last.second);
        }

        // Only validated ids reach the pending slot or the memory.
        let def = find_action(id)?;

        let result = (def.apply)(first, if def.unary { None } else { second });
        debug!(id, result, "computed result");

        self.reset(ClearSeed {
            result: fmt_number(result),
            // A missing second operand poisons the memory to NaN rather
            // than remembering zero.
            second: second.map_or_else(|| "NaN".to_owned(), fmt_number),
            action: id,
        });
        self.render();
        Some(result)
    }

    /// Reset to the idle state with empty buffers and no memory.
    pub fn clear(&mut self) {
        self.clear_with(ClearSeed::default());
    }

    /// Reset to the idle state with the given seeds.
    pub fn clear_with(&mut self, seed: ClearSeed) {
        self.reset(seed);
        self.render();
    }

    fn reset(&mut self, seed: ClearSeed) {
        self.pending = EQUAL;
        self.first = seed.result;
        self.second.clear();
        self.last.action = seed.action;
        self.last.second = seed.second;
    }

    /// The rendered text for the current state.
    ///
    /// Pure: first operand, plus the action symbol and second operand
    /// while a binary action is pending. A pending unary action shows
    /// only the first operand.
    pub fn display_text(&self) -> String {
        let mut text = self.first.clone();

        if self.pending == EQUAL {
            return text;
        }
        if let Some(def) = find_action(self.pending) {
            if !def.unary {
                text.push_str(def.symbol);
                text.push_str(&self.second);
            }
        }
        text
    }

    /// Push the current display text into the bound sink.
    pub fn render(&mut self) {
        let text = self.display_text();
        self.display.set_text(&text);
    }

    pub fn first_operand(&self) -> &str {
        &self.first
    }

    pub fn second_operand(&self) -> &str {
        &self.second
    }

    /// The currently pending action id; [`EQUAL`](action::EQUAL) while idle.
    pub fn pending_action(&self) -> ActionId {
        self.pending
    }
}

// Empty buffers are unset, not zero; anything unparsable is NaN.
fn to_number(buffer: &str) -> Option<f64> {
    if buffer.is_empty() {
        return None;
    }
    Some(buffer.parse().unwrap_or(f64::NAN))
}

fn fmt_number(value: f64) -> String {
    value.to_string()
}
