extern crate self as locator;

pub mod container;
pub mod key;
pub mod module;
pub mod ownership;
pub mod resolver;
pub mod upcast;
mod util;

#[cfg(feature = "derive")]
pub use locator_derive::interface;

pub mod prelude {
    #[cfg(feature = "derive")]
    pub use crate::interface;
    pub use crate::container::registry::{Registry, RegistryError, ResolveError};
    pub use crate::container::Locator;
    pub use crate::key;
    pub use crate::module::bind;
    pub use crate::ownership::{Ownership, OwnershipKind, Value};
    pub use crate::upcast::Upcast;
}
