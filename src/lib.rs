//! A two-operand calculator state machine with a pluggable display sink.
//!
//! The [`Calc`] state machine owns all mutable calculator state: the two
//! operand buffers, the pending action, and the last-operation memory
//! that makes repeated equals replay the previous operation. Every state
//! change ends with one render into the bound [`DisplaySink`].
//!
//! Input wiring stays outside the crate: a host either calls [`Calc`]
//! directly, or queues [`InputEvent`]s through a [`Dispatcher`] /
//! [`InputHandle`] pair and lets the dispatcher apply them in order.
//!
//! ## Example
//!
//! ```rust
//! use deskcalc::{action, Calc, DisplaySink};
//!
//! struct ConsoleDisplay;
//!
//! impl DisplaySink for ConsoleDisplay {
//!     fn set_text(&mut self, text: &str) {
//!         println!("{text}");
//!     }
//! }
//!
//! let mut calc = Calc::new(ConsoleDisplay);
//!
//! calc.enter_digit('5');
//! calc.select_action(action::ADD)?;
//! calc.enter_digit('3');
//! let result = calc.select_action(action::EQUAL)?;
//!
//! assert_eq!(result, Some(8.0));
//! assert_eq!(calc.display_text(), "8");
//!
//! // Equals again replays "+ 3" against the result.
//! assert_eq!(calc.compute_result(), Some(11.0));
//! # Ok::<(), deskcalc::CalcError>(())
//! ```

pub mod action;
mod calc;
mod dispatch;
mod display;
mod error;

pub use action::ActionId;
pub use calc::{Calc, ClearSeed};
pub use dispatch::{Dispatcher, InputEvent, InputHandle};
pub use display::DisplaySink;
pub use error::CalcError;

// Test utilities (only available with the 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use display::TestDisplay;
