//! Host platform seams.
//!
//! The bridge does not subclass a platform element type; it conforms to the
//! platform's lifecycle interface through these traits. The host platform
//! owns element creation, mutation observation, and rendering; the bridge
//! only reacts to connect/disconnect notifications and reads the element's
//! static attribute list.

use crate::error::{BridgeError, SetupError};
use crate::lifecycle::BridgeState;
use crate::program::MessageCallback;
use serde_json::Value;
use std::rc::Rc;

/// A mounted element as the bridge sees it.
///
/// `create_mount` prepares a fresh mount point for the program: any previous
/// content is cleared and a new container is appended, inside an isolation
/// boundary (shadow subtree or equivalent) when `isolated` is true. The mount
/// point type is opaque to the bridge and flows straight into
/// [`Program::init`](crate::program::Program::init).
pub trait HostElement {
    /// Mount point type produced for the program.
    type Mount;

    /// The element's static attribute list, read at connect time only.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Prepare a mount point, optionally behind an isolation boundary.
    fn create_mount(&self, isolated: bool) -> Result<Self::Mount, SetupError>;
}

/// Detach notification, delivered independently of the host element type.
///
/// Split from [`ElementLifecycle`] because detaching carries no element
/// reference: keeping it on the `E`-generic trait would make the call
/// ambiguous on a concrete element that bridges more than one host type.
pub trait Detach {
    /// The element was detached from the document.
    fn on_disconnect(&self);
}

/// Lifecycle notifications the platform delivers to every element occurrence.
pub trait ElementLifecycle<E: HostElement>: Detach {
    /// The element was attached to the document.
    fn on_connect(&self, element: &E);
}

/// Consumer-facing messaging surface of a bridged element.
pub trait ElementSurface {
    /// Forward a message verbatim to the program's inbound channel.
    ///
    /// Fails with [`BridgeError::NotReady`] while no ports are wired.
    fn send(&self, message: Value) -> Result<(), BridgeError>;

    /// Subscribe to the program's outbound channel.
    ///
    /// Fails with [`BridgeError::NotReady`] while no ports are wired.
    fn subscribe(&self, callback: MessageCallback) -> Result<(), BridgeError>;

    /// Post a `{topic, payload}` record to the program.
    ///
    /// Enqueues while the program is not yet ready; forwards directly once
    /// ports are wired. Never fails: pre-readiness messages wait in the
    /// queue for the flush.
    fn post_message(&self, topic: &str, payload: Value);

    /// Current lifecycle state.
    fn state(&self) -> BridgeState;

    /// Number of messages waiting for the one-time flush.
    fn pending_messages(&self) -> usize;
}

/// What an element class instantiates: lifecycle conformance plus the
/// messaging surface.
pub trait Element<E: HostElement>: ElementLifecycle<E> + ElementSurface {}

impl<E: HostElement, T: ElementLifecycle<E> + ElementSurface> Element<E> for T {}

/// Factory the registry stores per tag; the platform calls `instantiate`
/// once per element occurrence in markup.
pub trait ElementClass<E: HostElement> {
    /// Create one element instance.
    fn instantiate(&self) -> Rc<dyn Element<E>>;
}
