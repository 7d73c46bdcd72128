pub mod badge;

pub use badge::{amount_color, AmountBadge, DeletedBadge};
