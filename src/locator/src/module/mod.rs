pub mod dsl;

pub use dsl::bind;
