//! The bridge element: lifecycle controller for one element occurrence.
//!
//! # Architecture
//!
//! ```text
//! markup attributes
//!        │ extract + camelize
//!        ▼
//!     PropMap ── merge(static flags) ── map_flags ──► Flags
//!                                                       │
//!                 ┌─────────────────────────────────────┘
//!                 ▼
//!        Program::init(flags, mount) ──► ProgramPorts
//!                 │                          │
//!                 │              ┌───────────┴───────────┐
//!                 │              ▼                       ▼
//!                 │       outbound (subscribe)    inbound (send)
//!                 │                                      ▲
//!                 ▼                                      │
//!          setup error ──► on_setup_error      MessageQueue flush
//! ```
//!
//! One `BridgeElement` exists per element occurrence in markup. It owns the
//! connect/disconnect state machine, runs the setup pipeline, wires the
//! program's ports, flushes the pending-message queue exactly once, and
//! dispatches setup errors. Setup errors never escape to the platform.

use crate::error::{BridgeError, SetupError};
use crate::flags;
use crate::host::{Detach, ElementLifecycle, ElementSurface, HostElement};
use crate::lifecycle::BridgeState;
use crate::options::{BridgeOptions, SetupContext};
use crate::program::{MessageCallback, Program, ProgramPorts};
use crate::props;
use crate::queue::{MessageQueue, QueuedMessage};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Lifecycle controller for one bridged element instance.
///
/// The queue lives as long as the element instance, across reconnect cycles;
/// ports belong to one connection cycle and are replaced when a new one
/// begins.
pub struct BridgeElement<P: Program> {
    /// Tag this element was registered under, carried for diagnostics.
    tag: String,

    /// The wrapped program, shared by every instance of the same class.
    program: Rc<P>,

    /// Registration options, shared by every instance of the same class.
    options: Rc<BridgeOptions>,

    /// Connect/disconnect state machine.
    state: Cell<BridgeState>,

    /// Pending messages awaiting the one-time flush.
    queue: MessageQueue,

    /// Ports of the current program handle, absent until setup succeeds.
    ports: RefCell<Option<ProgramPorts>>,
}

impl<P: Program> BridgeElement<P> {
    /// Create an unattached element instance.
    pub fn new(tag: impl Into<String>, program: Rc<P>, options: Rc<BridgeOptions>) -> Self {
        Self {
            tag: tag.into(),
            program,
            options,
            state: Cell::new(BridgeState::Unattached),
            queue: MessageQueue::new(),
            ports: RefCell::new(None),
        }
    }

    /// Tag this element was registered under.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Check if program ports are currently wired.
    pub fn is_wired(&self) -> bool {
        self.ports.borrow().is_some()
    }

    fn transition(&self, next: BridgeState) -> Result<(), BridgeError> {
        let current = self.state.get();
        if !current.can_transition_to(next) {
            return Err(BridgeError::InvalidTransition {
                from: current,
                to: next,
            });
        }
        tracing::debug!(tag = %self.tag, from = ?current, to = ?next, "lifecycle transition");
        self.state.set(next);
        Ok(())
    }

    /// Run the setup pipeline: extract, merge, map, mount, init.
    ///
    /// `context.flags` is filled as soon as flag mapping completes, so a
    /// later mount or init failure still reports the computed flags.
    fn try_setup<E>(&self, element: &E, context: &mut SetupContext) -> Result<ProgramPorts, SetupError>
    where
        E: HostElement<Mount = P::Mount>,
    {
        let props = props::extract(element);
        let merged = flags::merge(props, &self.options.static_flags);
        let flags = (self.options.map_flags)(merged)?;
        context.flags = Some(flags.clone());

        let mount = element.create_mount(self.options.use_shadow_dom)?;
        self.program.init(flags, &mount)
    }

    /// Wire ports and drain the queue after a successful `init`.
    ///
    /// Order matters: the port-setup callback runs first, then the surface
    /// becomes live, then the queue drains. A reconnect after an earlier
    /// flush skips the drain; the flush is one-time per element instance.
    fn finish_setup(&self, ports: ProgramPorts) {
        (self.options.setup_ports)(&ports);

        let inbound = ports.inbound.clone();
        *self.ports.borrow_mut() = Some(ports);

        if !self.queue.is_flushed() {
            match self.queue.flush(|message| inbound.send(envelope(message))) {
                Ok(count) if count > 0 => {
                    tracing::debug!(tag = %self.tag, count, "flushed pending messages");
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(tag = %self.tag, %error, "pending-message flush skipped");
                }
            }
        }

        if let Err(error) = self.transition(BridgeState::Ready) {
            tracing::warn!(tag = %self.tag, %error, "unexpected transition after setup");
        }
    }

    fn report_setup_error(&self, error: &SetupError, context: &SetupContext) {
        match &self.options.on_setup_error {
            Some(handler) => handler(error, context),
            None => tracing::error!(
                tag = %self.tag,
                %error,
                "element setup failed; pass an `on_setup_error` handler to BridgeOptions to handle these"
            ),
        }
    }
}

impl<P, E> ElementLifecycle<E> for BridgeElement<P>
where
    P: Program,
    E: HostElement<Mount = P::Mount>,
{
    fn on_connect(&self, element: &E) {
        if let Err(error) = self.transition(BridgeState::Connecting) {
            tracing::warn!(tag = %self.tag, %error, "ignoring connect notification");
            return;
        }

        // Ports from a previous cycle are stale once a new one begins; a
        // failed reconnect must leave the element inert, not wired to a dead
        // program instance.
        self.ports.borrow_mut().take();

        let mut context = SetupContext::default();
        match self.try_setup(element, &mut context) {
            Ok(ports) => self.finish_setup(ports),
            Err(error) => {
                if let Err(transition_error) = self.transition(BridgeState::Failed) {
                    tracing::warn!(tag = %self.tag, error = %transition_error, "unexpected transition after setup failure");
                }
                self.report_setup_error(&error, &context);
            }
        }
    }

}

impl<P: Program> Detach for BridgeElement<P> {
    fn on_disconnect(&self) {
        // Ports, queue contents, and flushed status all survive a disconnect;
        // only the state changes. `on_detached` fires once per notification,
        // whatever the state.
        if let Err(error) = self.transition(BridgeState::Disconnected) {
            tracing::warn!(tag = %self.tag, %error, "unexpected disconnect transition");
        }
        (self.options.on_detached)();
    }
}

impl<P: Program> ElementSurface for BridgeElement<P> {
    fn send(&self, message: Value) -> Result<(), BridgeError> {
        match &*self.ports.borrow() {
            Some(ports) => {
                ports.inbound.send(message);
                Ok(())
            }
            None => Err(BridgeError::NotReady {
                state: self.state.get(),
            }),
        }
    }

    fn subscribe(&self, callback: MessageCallback) -> Result<(), BridgeError> {
        match &*self.ports.borrow() {
            Some(ports) => {
                ports.outbound.subscribe(callback);
                Ok(())
            }
            None => Err(BridgeError::NotReady {
                state: self.state.get(),
            }),
        }
    }

    fn post_message(&self, topic: &str, payload: Value) {
        let message = QueuedMessage {
            topic: topic.to_string(),
            payload,
        };

        if let Some(ports) = &*self.ports.borrow() {
            ports.inbound.send(envelope(message));
            return;
        }

        if !self.queue.push(message) {
            // Flushed queue with no live ports: the source ties the flushed
            // flag to the element instance, so a message posted after a
            // failed reconnect has nowhere to go.
            tracing::warn!(
                tag = %self.tag,
                "message dropped: queue already flushed and no program ports are wired"
            );
        }
    }

    fn state(&self) -> BridgeState {
        self.state.get()
    }

    fn pending_messages(&self) -> usize {
        self.queue.len()
    }
}

/// Wire shape of a posted message: `{"topic": ..., "payload": ...}`.
fn envelope(message: QueuedMessage) -> Value {
    json!({ "topic": message.topic, "payload": message.payload })
}
