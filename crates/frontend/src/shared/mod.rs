pub mod api;
pub mod components;
pub mod config;
pub mod confirm;
pub mod crud;
pub mod date_utils;
pub mod dynamic_table;
pub mod icons;
pub mod modal_frame;
pub mod notification;
pub mod page_frame;
pub mod resource_modal;
