//! End-to-end demo: a counter program mounted as a custom element.
//!
//! Run with: `cargo run --example counter`

use portico::prelude::*;
use std::cell::{Cell, RefCell};

/// Mount point for this demo host; a real platform would hand out a render
/// target here.
#[derive(Debug, Clone, Copy)]
struct DemoMount;

struct DemoElement {
    attributes: Vec<(String, String)>,
}

impl HostElement for DemoElement {
    type Mount = DemoMount;

    fn attributes(&self) -> Vec<(String, String)> {
        self.attributes.clone()
    }

    fn create_mount(&self, isolated: bool) -> std::result::Result<DemoMount, SetupError> {
        tracing::debug!(isolated, "mount prepared");
        Ok(DemoMount)
    }
}

#[derive(Default)]
struct CounterState {
    count: Cell<i64>,
    subscribers: RefCell<Vec<MessageCallback>>,
}

impl CounterState {
    fn publish(&self, message: Value) {
        let subscribers = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(&message);
        }
    }
}

/// A counter that adds whatever arrives inbound and publishes every new
/// total outbound. The starting value comes from the `start` attribute.
struct CounterProgram;

impl Program for CounterProgram {
    type Mount = DemoMount;

    fn init(&self, flags: Flags, _mount: &DemoMount) -> std::result::Result<ProgramPorts, SetupError> {
        let start = flags
            .as_ref()
            .and_then(|value| value.get("start"))
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(0);

        let state = Rc::new(CounterState::default());
        state.count.set(start);
        tracing::info!(start, "counter initialized");

        Ok(ProgramPorts {
            outbound: Rc::new(CounterOutbound {
                state: state.clone(),
            }),
            inbound: Rc::new(CounterInbound { state }),
        })
    }
}

struct CounterInbound {
    state: Rc<CounterState>,
}

impl InboundPort for CounterInbound {
    fn send(&self, message: Value) {
        let step = message.get("payload").and_then(Value::as_i64).unwrap_or(1);
        self.state.count.set(self.state.count.get() + step);
        self.state.publish(json!({ "count": self.state.count.get() }));
    }
}

struct CounterOutbound {
    state: Rc<CounterState>,
}

impl OutboundPort for CounterOutbound {
    fn subscribe(&self, callback: MessageCallback) {
        self.state.subscribers.borrow_mut().push(callback);
    }
}

fn main() -> std::result::Result<(), RegistryError> {
    tracing_subscriber::fmt().init();

    let registry: ElementRegistry<DemoElement> = ElementRegistry::new();
    register(
        &registry,
        "counter-widget",
        CounterProgram,
        BridgeOptions::new().on_detached(|| tracing::info!("counter detached")),
    )?;

    let element = registry
        .instantiate("counter-widget")
        .expect("tag was just registered");

    // Posted before the program exists: buffered, then flushed on connect.
    element.post_message("add", json!(5));
    element.post_message("add", json!(2));

    let host = DemoElement {
        attributes: vec![("start".to_string(), "10".to_string())],
    };
    element.on_connect(&host);

    element
        .subscribe(Rc::new(|message: &Value| {
            tracing::info!(%message, "counter update");
        }))
        .expect("element is ready");

    // Direct post: bypasses the queue, triggers a subscribed update.
    element.post_message("add", json!(1));

    element.on_disconnect();
    Ok(())
}
