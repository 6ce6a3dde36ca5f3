//! Wrapped-program contract: initialization and message ports.
//!
//! A program is the externally-supplied reactive module the bridge mounts
//! behind an element. Its only visible contract is `init(flags, mount)`
//! returning a pair of named channels: an outbound port the host can
//! subscribe to, and an inbound port the host sends into.

use crate::error::SetupError;
use crate::flags::Flags;
use serde_json::Value;
use std::rc::Rc;

/// Callback invoked for every message the program publishes outbound.
pub type MessageCallback = Rc<dyn Fn(&Value)>;

/// Program → host channel ("toJs"-style).
pub trait OutboundPort {
    /// Register a callback for outbound messages.
    fn subscribe(&self, callback: MessageCallback);
}

/// Host → program channel ("fromJs"-style).
pub trait InboundPort {
    /// Deliver a message into the program.
    fn send(&self, message: Value);
}

/// The channel pair a successful `init` exposes.
#[derive(Clone)]
pub struct ProgramPorts {
    /// Program → host channel.
    pub outbound: Rc<dyn OutboundPort>,
    /// Host → program channel.
    pub inbound: Rc<dyn InboundPort>,
}

/// An initializable reactive program.
///
/// `init` is invoked synchronously during the element's `Connecting` phase;
/// any asynchronous behavior inside the program itself is opaque to the
/// bridge. The mount point type is chosen by the host platform and passed
/// through untouched.
///
/// # Example
///
/// ```rust,ignore
/// struct Counter;
///
/// impl Program for Counter {
///     type Mount = DomNode;
///
///     fn init(&self, flags: Flags, mount: &DomNode) -> Result<ProgramPorts, SetupError> {
///         let runtime = CounterRuntime::start(flags, mount)
///             .map_err(|e| SetupError::ProgramInit(e.to_string()))?;
///         Ok(runtime.ports())
///     }
/// }
/// ```
pub trait Program {
    /// Mount point type the program renders into.
    type Mount;

    /// Initialize the program with derived flags on the given mount point.
    fn init(&self, flags: Flags, mount: &Self::Mount) -> Result<ProgramPorts, SetupError>;
}
