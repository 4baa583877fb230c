pub mod api;
pub mod core;
pub mod editor;
pub mod gui;
pub mod persistence;

pub use crate::core::errors::TermlinkError;
