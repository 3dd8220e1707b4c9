pub mod aggregate;
pub mod form;

pub use aggregate::{Category, CategoryCreate, CategoryId, CategoryUpdate};
