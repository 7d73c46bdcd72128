//! Wire types shared by the console frontend and the REST backend.

pub mod domain;
pub mod enums;
pub mod shared;
