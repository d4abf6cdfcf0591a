// Reusable components live here.

pub mod chips;
pub mod confirm_button;
pub mod loading_spinner;
pub mod modal;
pub mod notice;
pub mod page_title;
pub mod pagination;
pub mod sidebar;
