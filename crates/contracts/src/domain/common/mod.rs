//! Common types and traits for all resources

pub mod aggregate_id;
pub mod envelope;
pub mod lenient;
pub mod resource;
pub mod status;

// Re-exports
pub use aggregate_id::AggregateId;
pub use envelope::ApiEnvelope;
pub use resource::Resource;
pub use status::Status;
