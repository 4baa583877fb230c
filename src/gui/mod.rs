pub mod actions;
pub mod app;
pub mod board;
pub mod export_bar;
pub mod merge_modal;
pub mod notice_modal;
pub mod settings;
pub mod status_overlay;
pub mod theme;

pub use app::TermlinkApp;
