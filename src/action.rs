//! Action identifiers and the arithmetic action table.

/// Identifier for a calculator action.
///
/// The id space is the contract between the host's input wiring and the
/// state machine, so it stays a plain integer rather than a closed enum:
/// a miswired button can produce an id outside the table, and
/// [`Calc::select_action`](crate::Calc::select_action) rejects it at
/// runtime instead of the type system hiding the case.
pub type ActionId = i32;

/// Wipe all state. Handled directly by the state machine; never stored as
/// a pending action.
pub const CLEAR: ActionId = -1;
/// Compute the pending (or replayed) operation. Doubles as the idle
/// sentinel in the pending-action slot.
pub const EQUAL: ActionId = 0;
pub const ADD: ActionId = 1;
pub const SUBTRACT: ActionId = 2;
pub const MULTIPLY: ActionId = 3;
pub const DIVIDE: ActionId = 4;
pub const SQUARE_ROOT: ActionId = 5;

/// One entry in the action table.
pub(crate) struct ActionDef {
    pub(crate) id: ActionId,
    /// Rendered between the operands while the action is pending. Unary
    /// actions never render a symbol.
    pub(crate) symbol: &'static str,
    pub(crate) unary: bool,
    pub(crate) apply: fn(Option<f64>, Option<f64>) -> f64,
}

// An unset operand coerces to zero inside the arithmetic.
fn num(operand: Option<f64>) -> f64 {
    operand.unwrap_or(0.0)
}

fn add(a: Option<f64>, b: Option<f64>) -> f64 {
    num(a) + num(b)
}

fn subtract(a: Option<f64>, b: Option<f64>) -> f64 {
    num(a) - num(b)
}

fn multiply(a: Option<f64>, b: Option<f64>) -> f64 {
    num(a) * num(b)
}

fn divide(a: Option<f64>, b: Option<f64>) -> f64 {
    num(a) / num(b)
}

fn square_root(a: Option<f64>, _b: Option<f64>) -> f64 {
    num(a).sqrt()
}

pub(crate) static ACTIONS: [ActionDef; 5] = [
    ActionDef {
        id: ADD,
        symbol: " + ",
        unary: false,
        apply: add,
    },
    ActionDef {
        id: SUBTRACT,
        symbol: " - ",
        unary: false,
        apply: subtract,
    },
    ActionDef {
        id: MULTIPLY,
        symbol: " * ",
        unary: false,
        apply: multiply,
    },
    ActionDef {
        id: DIVIDE,
        symbol: " / ",
        unary: false,
        apply: divide,
    },
    ActionDef {
        id: SQUARE_ROOT,
        symbol: "",
        unary: true,
        apply: square_root,
    },
];

pub(crate) fn find_action(id: ActionId) -> Option<&'static ActionDef> {
    ACTIONS.iter().find(|action| action.id == id)
}
