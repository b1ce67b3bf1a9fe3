use std::sync::Arc;

use parking_lot::Mutex;

use locator::prelude::*;

#[derive(Debug, Default)]
struct Foo;

impl Foo {
    fn name(&self) -> &str {
        "foo"
    }
}

trait NamedBar: Send + Sync {
    fn name(&self) -> String;

    fn set_name(&self, value: &str);
}

#[derive(Debug)]
struct Bar {
    name: Mutex<String>,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            name: Mutex::new(String::from("bar")),
        }
    }
}

#[interface]
impl NamedBar for Bar {
    fn name(&self) -> String {
        self.name.lock().clone()
    }

    fn set_name(&self, value: &str) {
        *self.name.lock() = value.to_owned();
    }
}

static FOO: Foo = Foo;

fn main() {
    let services = Arc::new(Locator::new());

    services.register_self(Value(Foo));
    services.register::<Arc<dyn NamedBar>, _>(Arc::new(Bar::default()));
    services.register::<Value<dyn NamedBar>, _>(Value(Bar::default()));
    services.register_self(&FOO);

    if let Some(foo) = services.resolve::<Value<Foo>>() {
        println!("{}", foo.name());
    }

    if let Some(foo) = services.resolve::<&'static Foo>() {
        println!("{}", foo.name());
    }

    if let Some(bar) = services.resolve::<Arc<dyn NamedBar>>() {
        println!("{}", bar.name());
        bar.set_name("new bar");
    }

    if let Some(bar) = services.resolve::<Arc<dyn NamedBar>>() {
        println!("{}", bar.name());
    }

    if let Some(bar) = services.resolve::<Value<dyn NamedBar>>() {
        println!("{}", bar.name());
    }

    println!("closing app");
}
