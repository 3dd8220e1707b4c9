//! Generic create/edit dialog.
//!
//! [`ModalMachine`] is the pure state machine (draft, inline errors, in-flight
//! save guard); [`ResourceModal`] renders it for any [`FormModel`] from the
//! record's field schema.
//!
//! [`FormModel`]: contracts::shared::form::FormModel

mod object_url;
mod state;
mod view;

pub use object_url::{ObjectUrl, PreviewSlot};
pub use state::{EditSession, ModalMachine, SaveRequest};
pub use view::{
    ModalHandle, ModalOptions, ReferenceOption, ResourceModal, SaveFuture, SaveHandler,
};
