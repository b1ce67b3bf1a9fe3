pub mod registry;

mod handle;

pub use handle::Locator;
