#![cfg(feature = "derive")]

use std::sync::Arc;

use mockall::automock;
use parking_lot::Mutex;

use locator::prelude::*;

#[derive(Debug, Default, PartialEq)]
pub struct Counter {
    count: u32,
}

#[automock]
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

impl Upcast<dyn Logger> for MockLogger {
    fn upcast_ref(&self) -> &(dyn Logger + 'static) {
        self
    }

    fn upcast_mut(&mut self) -> &mut (dyn Logger + 'static) {
        self
    }

    fn upcast_arc(self: Arc<Self>) -> Arc<dyn Logger> {
        self
    }
}

#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[interface]
impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.lines.lock().push(message.to_owned());
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

pub struct FixedClock(u64);

#[interface]
impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

static EPOCH: FixedClock = FixedClock(1_700_000_000);

pub struct Unregistered;

#[test]
fn value_counter_mutation_persists() {
    let mut locator = Locator::new();
    locator.register_self(Value(Counter::default()));

    locator.resolve_mut::<Value<Counter>>().unwrap().count += 1;
    assert_eq!(locator.resolve::<Value<Counter>>(), Some(&Counter { count: 1 }));

    locator.resolve_mut::<Value<Counter>>().unwrap().count += 1;
    assert_eq!(locator.resolve::<Value<Counter>>(), Some(&Counter { count: 2 }));
}

#[test]
fn shared_logger_resolved_as_interface_succeeds() {
    let logger = Arc::new(MemoryLogger::default());
    let locator = Locator::new();
    locator.register::<Arc<dyn Logger>, _>(Arc::clone(&logger));

    locator.resolve::<Arc<dyn Logger>>().unwrap().log("first");
    locator.resolve::<Arc<dyn Logger>>().unwrap().log("second");
    assert_eq!(logger.lines(), ["first", "second"]);

    // Registered under the interface only.
    assert!(!locator.can_resolve::<Arc<MemoryLogger>>());
    assert!(!locator.can_resolve::<Value<dyn Logger>>());
}

#[test]
fn static_clock_resolved_as_interface_succeeds() {
    let locator = Locator::new();
    locator.register::<&'static dyn Clock, _>(&EPOCH);

    let clock = locator.resolve::<&'static dyn Clock>().unwrap();
    drop(locator);
    assert_eq!(clock.now(), 1_700_000_000);
}

#[test]
fn resolve_fails_when_form_is_not_registered() {
    let locator = Locator::new();
    locator.register_self(Value(Counter::default()));

    assert!(locator.resolve::<Value<Unregistered>>().is_none());
    assert!(locator.resolve::<Arc<Counter>>().is_none());
    assert!(locator.resolve::<&'static Counter>().is_none());
    assert!(matches!(
        locator.require::<Value<Unregistered>>(),
        Err(ResolveError::NotFound { .. })
    ));
}

#[test]
fn duplicated_registration_keeps_first() {
    let locator = Locator::new();
    let first = Arc::new(MemoryLogger::default());
    let second = Arc::new(MemoryLogger::default());

    locator.register::<Arc<dyn Logger>, _>(Arc::clone(&first));
    locator.register::<Arc<dyn Logger>, _>(Arc::clone(&second));
    assert_eq!(locator.len(), 1);
    assert_eq!(Arc::strong_count(&second), 1);

    locator.resolve::<Arc<dyn Logger>>().unwrap().log("kept");
    assert_eq!(first.lines(), ["kept"]);
    assert!(second.lines().is_empty());

    let err = locator
        .try_register::<Arc<dyn Logger>, _>(second)
        .unwrap_err();
    assert!(matches!(err, RegistryError::KeyDuplicated { .. }));
}

#[test]
fn binding_registers_every_kind() {
    let locator = Locator::new();
    bind::<Value<Counter>>()
        .to_instance(Value(Counter { count: 5 }))
        .set_on(&locator);
    bind::<Arc<dyn Logger>>()
        .to_instance(Arc::new(MemoryLogger::default()))
        .set_on(&locator);
    bind::<&'static dyn Clock>().to_instance(&EPOCH).set_on(&locator);

    assert_eq!(locator.len(), 3);
    assert_eq!(locator.resolve::<Value<Counter>>(), Some(&Counter { count: 5 }));
    assert!(locator.can_resolve::<Arc<dyn Logger>>());
    assert!(locator.can_resolve::<&'static dyn Clock>());
}

#[test]
fn mock_logger_resolved_as_interface_succeeds() {
    let mut logger = MockLogger::new();
    logger
        .expect_log()
        .withf(|message| message.starts_with("order"))
        .times(2)
        .return_const(());
    let logger = Arc::new(logger);

    let locator = Locator::new();
    locator.register::<Arc<dyn Logger>, _>(Arc::clone(&logger));
    assert_eq!(Arc::strong_count(&logger), 2);

    for id in 1..=2 {
        let resolved = locator.resolve::<Arc<dyn Logger>>().unwrap();
        resolved.log(&format!("order {id} placed"));
    }
    assert_eq!(Arc::strong_count(&logger), 2);

    drop(locator);
    assert_eq!(Arc::strong_count(&logger), 1);
}
