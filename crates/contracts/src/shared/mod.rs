pub mod form;
pub mod metadata;
pub mod upload;
