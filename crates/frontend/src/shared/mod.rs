pub mod api_utils;
pub mod collection;
pub mod components;
pub mod date_utils;
pub mod details_page;
pub mod errors;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod state;
pub mod storage;
pub mod timing;
