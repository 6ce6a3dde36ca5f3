//! Pending-message queue for outbound-to-program messages.
//!
//! Messages posted through the element's message setter before the program is
//! ready are buffered here, then drained exactly once, in FIFO order, when
//! the ports come up. After the one-time flush the queue never buffers again
//! for this element instance; post-flush sends are forwarded directly by the
//! controller, and `push` becomes a no-op.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// A buffered message: the name under which it was posted plus its payload.
///
/// Immutable once enqueued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedMessage {
    /// Topic name the consumer posted under.
    pub topic: String,
    /// Opaque payload.
    pub payload: Value,
}

/// Ordered buffer of not-yet-deliverable messages with a one-time flush.
///
/// Lives for the whole element instance, not one connection cycle. Uses
/// `RefCell`/`Cell` interior mutability; the bridge is single-threaded.
#[derive(Debug, Default)]
pub struct MessageQueue {
    pending: RefCell<VecDeque<QueuedMessage>>,
    flushed: Cell<bool>,
}

impl MessageQueue {
    /// Create an empty, unflushed queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the tail.
    ///
    /// Returns `false` without buffering if the one-time flush has already
    /// occurred.
    pub fn push(&self, message: QueuedMessage) -> bool {
        if self.flushed.get() {
            return false;
        }
        self.pending.borrow_mut().push_back(message);
        true
    }

    /// Number of buffered messages.
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Check if no messages are buffered.
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Check if the one-time drain already occurred.
    pub fn is_flushed(&self) -> bool {
        self.flushed.get()
    }

    /// Drain every buffered message into `sink`, in enqueue order, exactly
    /// once.
    ///
    /// Returns the number of messages delivered. A second call fails with
    /// [`BridgeError::AlreadyFlushed`].
    pub fn flush(&self, mut sink: impl FnMut(QueuedMessage)) -> Result<usize, BridgeError> {
        if self.flushed.get() {
            return Err(BridgeError::AlreadyFlushed);
        }
        self.flushed.set(true);

        // Take the whole buffer before invoking the sink: a sink callback may
        // re-enter the element surface, which must not observe a held borrow.
        let drained: Vec<QueuedMessage> = self.pending.borrow_mut().drain(..).collect();
        let count = drained.len();
        for message in drained {
            sink(message);
        }
        Ok(count)
    }
}
