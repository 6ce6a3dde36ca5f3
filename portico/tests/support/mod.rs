//! Shared fixtures: a fake host element and a recording program.

// Each test harness uses a different subset of the fixtures.
#![allow(dead_code)]

use portico::prelude::*;
use std::cell::{Cell, RefCell};

/// Mount point handed to the program; remembers whether isolation was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeMount {
    pub isolated: bool,
}

/// Host element with a static attribute list and recorded mount creations.
pub struct FakeElement {
    attributes: Vec<(String, String)>,
    pub mounts: RefCell<Vec<FakeMount>>,
    pub fail_mount: Cell<bool>,
}

impl FakeElement {
    pub fn new(attributes: &[(&str, &str)]) -> Self {
        Self {
            attributes: attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            mounts: RefCell::new(Vec::new()),
            fail_mount: Cell::new(false),
        }
    }
}

impl HostElement for FakeElement {
    type Mount = FakeMount;

    fn attributes(&self) -> Vec<(String, String)> {
        self.attributes.clone()
    }

    fn create_mount(&self, isolated: bool) -> std::result::Result<FakeMount, SetupError> {
        if self.fail_mount.get() {
            return Err(SetupError::Mount("host refused to create a mount".to_string()));
        }
        let mount = FakeMount { isolated };
        self.mounts.borrow_mut().push(mount);
        Ok(mount)
    }
}

/// Everything the recording program observed, shared across its ports.
#[derive(Default)]
pub struct ProgramLog {
    pub init_flags: RefCell<Vec<Flags>>,
    pub inbound: RefCell<Vec<Value>>,
    callbacks: RefCell<Vec<MessageCallback>>,
}

impl ProgramLog {
    pub fn init_count(&self) -> usize {
        self.init_flags.borrow().len()
    }

    pub fn inbound_messages(&self) -> Vec<Value> {
        self.inbound.borrow().clone()
    }

    /// Publish a message through every subscribed callback.
    pub fn emit(&self, message: Value) {
        let callbacks = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback(&message);
        }
    }
}

/// Program whose ports record every interaction; `init` can be made to fail.
pub struct RecordingProgram {
    pub log: Rc<ProgramLog>,
    pub fail_init: Rc<Cell<bool>>,
}

impl RecordingProgram {
    pub fn new() -> Self {
        Self {
            log: Rc::new(ProgramLog::default()),
            fail_init: Rc::new(Cell::new(false)),
        }
    }
}

impl Program for RecordingProgram {
    type Mount = FakeMount;

    fn init(&self, flags: Flags, _mount: &FakeMount) -> std::result::Result<ProgramPorts, SetupError> {
        if self.fail_init.get() {
            return Err(SetupError::ProgramInit("init refused".to_string()));
        }
        self.log.init_flags.borrow_mut().push(flags);
        Ok(ProgramPorts {
            outbound: Rc::new(LogOutbound {
                log: self.log.clone(),
            }),
            inbound: Rc::new(LogInbound {
                log: self.log.clone(),
            }),
        })
    }
}

struct LogInbound {
    log: Rc<ProgramLog>,
}

impl InboundPort for LogInbound {
    fn send(&self, message: Value) {
        self.log.inbound.borrow_mut().push(message);
    }
}

struct LogOutbound {
    log: Rc<ProgramLog>,
}

impl OutboundPort for LogOutbound {
    fn subscribe(&self, callback: MessageCallback) {
        self.log.callbacks.borrow_mut().push(callback);
    }
}

/// Build a bridge element around a fresh recording program.
///
/// Returns the element plus handles to the program's log and its
/// failure switch.
pub fn bridge(
    options: BridgeOptions,
) -> (
    Rc<BridgeElement<RecordingProgram>>,
    Rc<ProgramLog>,
    Rc<Cell<bool>>,
) {
    let program = RecordingProgram::new();
    let log = program.log.clone();
    let fail_init = program.fail_init.clone();
    let element = Rc::new(BridgeElement::new(
        "test-widget",
        Rc::new(program),
        Rc::new(options),
    ));
    (element, log, fail_init)
}
