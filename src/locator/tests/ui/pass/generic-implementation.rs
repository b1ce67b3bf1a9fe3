use std::marker::PhantomData;
use std::sync::Arc;

use locator::prelude::*;

pub trait Store: Send + Sync {
    fn size(&self) -> usize;
}

pub struct MemoryStore<T> {
    items: Vec<T>,
}

#[interface]
impl<T> Store for MemoryStore<T>
where
    T: Send + Sync,
{
    fn size(&self) -> usize {
        self.items.len()
    }
}

#[interface(dyn Store)]
pub struct EmptyStore<T: Send + Sync> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync> Store for EmptyStore<T> {
    fn size(&self) -> usize {
        0
    }
}

fn main() {
    let locator = Locator::new();
    locator.register::<Arc<dyn Store>, _>(Arc::new(MemoryStore { items: vec![1, 2, 3] }));
    locator.register::<Value<dyn Store>, _>(Value(EmptyStore::<String> {
        _marker: PhantomData,
    }));

    assert_eq!(locator.resolve::<Arc<dyn Store>>().unwrap().size(), 3);
    assert_eq!(locator.resolve::<Value<dyn Store>>().unwrap().size(), 0);
}
