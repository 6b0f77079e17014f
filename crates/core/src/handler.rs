use crate::level::Level;
use crate::record::LogRecord;

/// A notification backend plugged into the pipeline.
///
/// Implementations must be `Send + Sync`; a stack may be shared across
/// threads and a single handler may see interleaved calls.
pub trait Handler: Send + Sync {
    /// Whether this handler wants records of the given severity.
    fn is_handling(&self, level: Level) -> bool;

    /// Offer a record to the handler.
    ///
    /// Returns `true` when the record was consumed and must not bubble to
    /// handlers further down the stack, `false` otherwise. A handler that is
    /// not handling the record's level returns `false` without side effects.
    fn handle(&self, record: &LogRecord) -> bool;
}

/// An ordered stack of handlers with bubbling semantics.
///
/// Records are offered to handlers in registration order; the first handler
/// that returns `true` from [`Handler::handle`] stops propagation.
#[derive(Default)]
pub struct HandlerStack {
    handlers: Vec<Box<dyn Handler>>,
}

impl HandlerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the stack.
    pub fn push(&mut self, handler: impl Handler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Offer a record to each handler in order until one consumes it.
    ///
    /// Returns `true` when any handler consumed the record.
    pub fn dispatch(&self, record: &LogRecord) -> bool {
        for handler in &self.handlers {
            if handler.handle(record) {
                return true;
            }
        }
        false
    }
}
