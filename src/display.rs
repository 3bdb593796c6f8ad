//! Display sink abstraction the calculator renders into.

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Display surface bound to a [`Calc`](crate::Calc).
///
/// The calculator calls [`set_text`](Self::set_text) after every state
/// mutation with the freshly rendered display string. The sink is written
/// to, never read.
///
/// # Example
///
/// ```rust
/// use deskcalc::DisplaySink;
///
/// struct ConsoleDisplay;
///
/// impl DisplaySink for ConsoleDisplay {
///     fn set_text(&mut self, text: &str) {
///         println!("{text}");
///     }
/// }
/// ```
pub trait DisplaySink {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

#[cfg(any(test, feature = "testing"))]
/// Display sink that captures every rendered string for assertions.
///
/// Only available with the `testing` feature. Clones share the same
/// capture storage, so tests can hand one clone to [`Calc`](crate::Calc)
/// and inspect renders through another.
///
/// # Example
///
/// ```rust
/// use deskcalc::{Calc, TestDisplay};
///
/// let display = TestDisplay::new();
/// let mut calc = Calc::new(display.clone());
///
/// calc.enter_digit('7');
///
/// assert_eq!(display.count(), 2); // initial render + one per mutation
/// assert_eq!(display.last().as_deref(), Some("7"));
/// ```
pub struct TestDisplay {
    texts: Arc<Mutex<Vec<String>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestDisplay {
    fn clone(&self) -> Self {
        Self {
            texts: self.texts.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl DisplaySink for TestDisplay {
    fn set_text(&mut self, text: &str) {
        self.texts.lock().push(text.to_owned());
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestDisplay {
    pub fn new() -> Self {
        Self {
            texts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of renders captured so far.
    pub fn count(&self) -> usize {
        self.texts.lock().len()
    }

    /// The most recently rendered text, if any render happened.
    pub fn last(&self) -> Option<String> {
        self.texts.lock().last().cloned()
    }

    /// Access all captured renders with a closure.
    pub fn with_texts<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<String>) -> R,
    {
        let texts = self.texts.lock();
        f(&texts)
    }
}
