//! Registry tests: tag binding, platform rules, instantiation.

mod support;

use portico::prelude::*;
use support::{FakeElement, RecordingProgram};

#[test]
fn register_binds_the_tag_and_instances_work_end_to_end() {
    let registry: ElementRegistry<FakeElement> = ElementRegistry::new();
    let program = RecordingProgram::new();
    let log = program.log.clone();

    register(&registry, "my-widget", program, BridgeOptions::new()).unwrap();
    assert!(registry.is_defined("my-widget"));
    assert_eq!(registry.count(), 1);

    let element = registry.instantiate("my-widget").unwrap();
    element.post_message("boot", json!({ "a": 1 }));

    let host = FakeElement::new(&[("label", "Hi")]);
    element.on_connect(&host);

    assert_eq!(element.state(), BridgeState::Ready);
    assert_eq!(
        log.init_flags.borrow().as_slice(),
        &[Some(json!({ "label": "Hi" }))]
    );
    assert_eq!(
        log.inbound_messages(),
        vec![json!({ "topic": "boot", "payload": { "a": 1 } })]
    );
}

#[test]
fn duplicate_tag_registration_is_a_conflict() {
    let registry: ElementRegistry<FakeElement> = ElementRegistry::new();

    register(
        &registry,
        "my-widget",
        RecordingProgram::new(),
        BridgeOptions::new(),
    )
    .unwrap();

    let second = register(
        &registry,
        "my-widget",
        RecordingProgram::new(),
        BridgeOptions::new(),
    );
    assert!(matches!(second, Err(RegistryError::DuplicateTag(tag)) if tag == "my-widget"));
    assert_eq!(registry.count(), 1);
}

#[test]
fn tag_without_hyphen_is_rejected() {
    let registry: ElementRegistry<FakeElement> = ElementRegistry::new();

    let result = register(
        &registry,
        "widget",
        RecordingProgram::new(),
        BridgeOptions::new(),
    );
    assert!(matches!(result, Err(RegistryError::InvalidName(tag)) if tag == "widget"));
    assert!(!registry.is_defined("widget"));
}

#[test]
fn instantiating_an_unknown_tag_yields_nothing() {
    let registry: ElementRegistry<FakeElement> = ElementRegistry::new();
    assert!(registry.instantiate("no-such-tag").is_none());
}

#[test]
fn each_instantiation_gets_its_own_queue_and_state() {
    let registry: ElementRegistry<FakeElement> = ElementRegistry::new();
    let program = RecordingProgram::new();
    let log = program.log.clone();
    register(&registry, "my-widget", program, BridgeOptions::new()).unwrap();

    let first = registry.instantiate("my-widget").unwrap();
    let second = registry.instantiate("my-widget").unwrap();

    first.post_message("only first", json!(1));
    assert_eq!(first.pending_messages(), 1);
    assert_eq!(second.pending_messages(), 0);

    let host = FakeElement::new(&[]);
    first.on_connect(&host);
    assert_eq!(first.state(), BridgeState::Ready);
    assert_eq!(second.state(), BridgeState::Unattached);

    // Only the first instance had anything to flush.
    assert_eq!(
        log.inbound_messages(),
        vec![json!({ "topic": "only first", "payload": 1 })]
    );
}
