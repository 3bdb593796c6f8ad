//! Crate error type.

use crate::action::ActionId;

/// Errors surfaced by the calculator state machine.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// An action id with no entry in the action table. This indicates
    /// miswired input glue, not bad user input, and is raised to the
    /// caller without touching any state.
    #[error("undefined action: {0}")]
    UndefinedAction(ActionId),
}
