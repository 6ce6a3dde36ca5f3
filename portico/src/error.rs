//! Error types for the element bridge.

use crate::lifecycle::BridgeState;
use thiserror::Error;

/// Errors raised while bringing a program up behind an element.
///
/// Setup errors are caught at the bridge boundary and dispatched to the
/// consumer's `on_setup_error` handler (or the default diagnostic); they never
/// escape to the host platform.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The consumer-supplied flag mapper rejected the merged properties.
    #[error("flag mapping failed: {0}")]
    FlagMapping(String),

    /// The host element could not prepare a mount point.
    #[error("mount point creation failed: {0}")]
    Mount(String),

    /// The wrapped program's `init` failed.
    #[error("program initialization failed: {0}")]
    ProgramInit(String),
}

/// Errors related to element state and messaging.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// No program ports are wired; the element has not (successfully)
    /// completed a connection cycle.
    #[error("element is not ready (state: {state:?}): no program ports are wired")]
    NotReady {
        /// Lifecycle state at the time of the call.
        state: BridgeState,
    },

    /// The pending-message queue has already performed its one-time flush.
    #[error("pending-message queue was already flushed")]
    AlreadyFlushed,

    /// A lifecycle notification arrived that the state machine does not
    /// accept from the current state.
    #[error("invalid lifecycle transition from {from:?} to {to:?}")]
    InvalidTransition {
        /// State before the rejected transition.
        from: BridgeState,
        /// Requested target state.
        to: BridgeState,
    },
}

/// Errors raised by the custom-element registry.
///
/// These propagate to the caller of [`register`](crate::registry::register);
/// the bridge performs no uniqueness or naming checks of its own beyond what
/// the platform table enforces.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The tag is already bound to an element class.
    #[error("tag already registered: {0}")]
    DuplicateTag(String),

    /// The tag does not satisfy the platform naming rule.
    #[error("invalid custom element name '{0}': must contain a hyphen")]
    InvalidName(String),
}
