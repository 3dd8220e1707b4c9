//! Resource workflows: every mutation is followed by a full re-fetch.

mod workflow;

#[cfg(test)]
mod fake;

pub use workflow::{
    create_then_refresh, delete_then_refresh, refresh, save_product, save_resource,
    update_then_refresh, SaveTarget,
};
