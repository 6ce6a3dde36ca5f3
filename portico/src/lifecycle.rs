//! Element lifecycle state machine.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a bridged element.
///
/// # State Transitions
///
/// ```text
/// Unattached → Connecting → Ready
///                         ↓
///                         Failed
///
/// any state  → Disconnected → Connecting (reconnect)
/// ```
///
/// # Invariants
///
/// - An element in `Ready` state has a live program handle and wired ports.
/// - `Disconnected` is not terminal: the platform may re-mount the element,
///   which re-enters `Connecting` with a fresh program handle.
/// - Message forwarding is decided by port presence, not by state alone:
///   disconnecting does not tear down ports or the queue's flushed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeState {
    /// Element constructed, never mounted.
    Unattached,

    /// Connect notification received; setup pipeline in progress.
    Connecting,

    /// Program initialized, ports wired, queue flushed.
    Ready,

    /// Setup raised an error; element stays mounted but inert.
    Failed,

    /// Disconnect notification received.
    Disconnected,
}

impl BridgeState {
    /// Check if transition to the next state is valid.
    ///
    /// # Valid Transitions
    ///
    /// - Unattached → Connecting
    /// - Disconnected → Connecting (reconnect)
    /// - Connecting → Ready (setup succeeded)
    /// - Connecting → Failed (setup raised)
    /// - any state → Disconnected
    pub fn can_transition_to(&self, next: BridgeState) -> bool {
        use BridgeState::*;
        matches!(
            (self, next),
            (Unattached, Connecting)
                | (Disconnected, Connecting)
                | (Connecting, Ready)
                | (Connecting, Failed)
                | (_, Disconnected)
        )
    }

    /// Check if the element has completed setup in this state.
    pub fn is_ready(&self) -> bool {
        matches!(self, BridgeState::Ready)
    }

    /// Check if a connect notification would be accepted from this state.
    pub fn accepts_connect(&self) -> bool {
        self.can_transition_to(BridgeState::Connecting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_state_transitions() {
        use BridgeState::*;

        // Valid transitions
        assert!(Unattached.can_transition_to(Connecting));
        assert!(Disconnected.can_transition_to(Connecting)); // Reconnect
        assert!(Connecting.can_transition_to(Ready));
        assert!(Connecting.can_transition_to(Failed)); // Setup failure
        assert!(Unattached.can_transition_to(Disconnected));
        assert!(Connecting.can_transition_to(Disconnected));
        assert!(Ready.can_transition_to(Disconnected));
        assert!(Failed.can_transition_to(Disconnected));
        assert!(Disconnected.can_transition_to(Disconnected)); // Repeated notification

        // Invalid transitions
        assert!(!Unattached.can_transition_to(Ready)); // Skip Connecting
        assert!(!Ready.can_transition_to(Connecting)); // Must disconnect first
        assert!(!Failed.can_transition_to(Connecting)); // Retry only after disconnect
        assert!(!Ready.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Ready)); // No automatic retry
    }

    #[test]
    fn test_bridge_state_is_ready() {
        use BridgeState::*;

        assert!(Ready.is_ready());

        assert!(!Unattached.is_ready());
        assert!(!Connecting.is_ready());
        assert!(!Failed.is_ready());
        assert!(!Disconnected.is_ready());
    }

    #[test]
    fn test_bridge_state_accepts_connect() {
        use BridgeState::*;

        assert!(Unattached.accepts_connect());
        assert!(Disconnected.accepts_connect());

        assert!(!Connecting.accepts_connect());
        assert!(!Ready.accepts_connect());
        assert!(!Failed.accepts_connect());
    }
}
