mod app_card;
mod app_details;
mod app_list;
mod eframe_impl;
mod main_display;
mod sidebar;
mod storefront;

pub use eframe_impl::StoreApp;
pub use main_display::{DisplaySettings, MainDisplay};
