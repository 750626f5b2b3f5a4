pub mod aggregate;

pub use aggregate::{Product, ProductId, ProductInput};
