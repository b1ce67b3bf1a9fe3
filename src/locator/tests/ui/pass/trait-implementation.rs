use std::sync::Arc;

use locator::prelude::*;

pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

pub struct English;

#[interface]
impl Greeter for English {
    fn greet(&self) -> String {
        String::from("hello")
    }
}

pub trait Handler<E>: Send + Sync {
    fn handle(&self, event: E) -> bool;
}

pub struct Accept;

#[interface]
impl Handler<u32> for Accept {
    fn handle(&self, event: u32) -> bool {
        event > 0
    }
}

fn main() {
    let locator = Locator::new();
    locator.register::<Arc<dyn Greeter>, _>(Arc::new(English));
    locator.register::<Value<dyn Handler<u32>>, _>(Value(Accept));

    assert_eq!(locator.resolve::<Arc<dyn Greeter>>().unwrap().greet(), "hello");
    assert!(locator.resolve::<Value<dyn Handler<u32>>>().unwrap().handle(1));
}
