use std::fmt::Debug;

use locator::prelude::*;

pub trait Named: Send + Sync {
    fn name(&self) -> &str;
}

pub trait Versioned: Send + Sync {
    fn version(&self) -> u32;
}

#[interface(dyn Named, dyn Versioned + 'static, dyn Debug + Send + Sync)]
#[derive(Debug)]
pub struct Service {
    name: &'static str,
    version: u32,
}

impl Named for Service {
    fn name(&self) -> &str {
        self.name
    }
}

impl Versioned for Service {
    fn version(&self) -> u32 {
        self.version
    }
}

#[interface(dyn Named)]
pub enum Mode {
    Fast,
    Safe,
}

impl Named for Mode {
    fn name(&self) -> &str {
        match self {
            Mode::Fast => "fast",
            Mode::Safe => "safe",
        }
    }
}

static SERVICE: Service = Service {
    name: "static",
    version: 3,
};

fn main() {
    let locator = Locator::new();
    locator.register::<&'static dyn Named, _>(&SERVICE);
    locator.register::<&'static dyn Versioned, _>(&SERVICE);
    locator.register::<Value<dyn Named>, _>(Value(Mode::Safe));
    locator.register::<Value<dyn Debug + Send + Sync>, _>(Value(Service {
        name: "debug",
        version: 1,
    }));

    assert_eq!(locator.resolve::<&'static dyn Named>().unwrap().name(), "static");
    assert_eq!(locator.resolve::<&'static dyn Versioned>().unwrap().version(), 3);
    assert_eq!(locator.resolve::<Value<dyn Named>>().unwrap().name(), "safe");
    assert!(locator.can_resolve::<Value<dyn Debug + Send + Sync>>());
    let _ = Mode::Fast;
}
