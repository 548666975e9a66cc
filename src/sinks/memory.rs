//! In-memory capture sink

use crate::core::{Result, Sink};
use std::cell::RefCell;
use std::rc::Rc;

/// Sink that appends everything to a shared in-memory buffer.
///
/// Clones share one buffer, so a caller can keep a handle for inspection and
/// hand another to the manager. Mainly used to capture output in tests and
/// host-side tooling.
///
/// # Example
///
/// ```
/// use debuglog::sinks::MemorySink;
/// use debuglog::LogManager;
///
/// let sink = MemorySink::new();
/// let mut manager = LogManager::new();
/// manager.attach_console(Box::new(sink.clone()));
///
/// manager.println(&[&"captured"]);
/// assert_eq!(sink.contents(), "captured\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Rc<RefCell<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Sink for MemorySink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.buffer.borrow_mut().push_str(text);
        Ok(())
    }

    fn write_line(&mut self) -> Result<()> {
        self.buffer.borrow_mut().push('\n');
        Ok(())
    }
}
