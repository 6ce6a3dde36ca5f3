//! Common imports for the element bridge.

pub use crate::element::BridgeElement;
pub use crate::error::{BridgeError, RegistryError, SetupError};
pub use crate::flags::{Flags, StaticFlags};
pub use crate::host::{Detach, Element, ElementClass, ElementLifecycle, ElementSurface, HostElement};
pub use crate::lifecycle::BridgeState;
pub use crate::options::{BridgeOptions, SetupContext};
pub use crate::program::{InboundPort, MessageCallback, OutboundPort, Program, ProgramPorts};
pub use crate::props::PropMap;
pub use crate::queue::QueuedMessage;
pub use crate::registry::{register, ElementRegistry};

// Re-export commonly used external types
pub use serde_json::{json, Value};
pub use std::rc::Rc;

/// Result type for element-surface operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
