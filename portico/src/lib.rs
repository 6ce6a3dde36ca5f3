//! # Portico
//!
//! Lifecycle bridge for mounting reactive programs as custom elements.
//!
//! A program exposes an `init` entry point and two message ports; markup
//! exposes tags with attributes. Portico sits between the two: it turns
//! attributes into initialization flags, manages the gap between "element
//! exists in markup" and "program is initialized and its channels are live",
//! and guarantees that no message posted by a consumer is lost or reordered
//! while the program is still coming up.
//!
//! ## Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ registry                                                    │
//! │   ElementRegistry: tag → ElementClass (platform table)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │ element                                                     │
//! │   BridgeElement: connect/disconnect state machine,          │
//! │   setup pipeline, port wiring, queue flush, error dispatch  │
//! ├──────────────┬──────────────┬───────────────────────────────┤
//! │ props        │ flags        │ queue                         │
//! │ camelize +   │ merge +      │ FIFO buffer,                  │
//! │ extract      │ map_flags    │ one-time flush                │
//! ├──────────────┴──────────────┴───────────────────────────────┤
//! │ host / program traits                                       │
//! │   HostElement, ElementLifecycle, ElementClass │ Program,    │
//! │   ProgramPorts (outbound subscribe / inbound send)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//! Unattached → Connecting → Ready
//!                         ↓
//!                         Failed
//! any state  → Disconnected → Connecting (reconnect)
//! ```
//!
//! Messages posted before `Ready` wait in a FIFO queue and are drained
//! exactly once, in order, when the ports come up; afterwards every post
//! bypasses the queue for the rest of the element's life. Setup errors are
//! reported through `on_setup_error` (or a default diagnostic) and never
//! escape to the platform.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portico::prelude::*;
//!
//! let registry = ElementRegistry::new();
//! register(
//!     &registry,
//!     "counter-widget",
//!     CounterProgram::new(),
//!     BridgeOptions::new()
//!         .static_flag("mode", json!("embedded"))
//!         .on_detached(|| tracing::info!("counter detached")),
//! )?;
//!
//! // The host platform instantiates and drives each occurrence:
//! let element = registry.instantiate("counter-widget").unwrap();
//! element.post_message("reset", json!({ "to": 0 })); // queued
//! element.on_connect(&host_element);                 // init + flush
//! ```

pub mod element;
pub mod error;
pub mod flags;
pub mod host;
pub mod lifecycle;
pub mod options;
pub mod prelude;
pub mod program;
pub mod props;
pub mod queue;
pub mod registry;

pub use element::BridgeElement;
pub use error::{BridgeError, RegistryError, SetupError};
pub use flags::{Flags, StaticFlags};
pub use host::{Detach, Element, ElementClass, ElementLifecycle, ElementSurface, HostElement};
pub use lifecycle::BridgeState;
pub use options::{BridgeOptions, SetupContext};
pub use program::{InboundPort, MessageCallback, OutboundPort, Program, ProgramPorts};
pub use props::{camelize, extract, PropMap};
pub use queue::{MessageQueue, QueuedMessage};
pub use registry::{register, ElementRegistry};
