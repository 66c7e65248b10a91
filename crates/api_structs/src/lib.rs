mod alert;
mod auth;
mod calendar;
mod dashboard;
pub mod dtos;
mod integration;
mod reminder;
mod resource;
mod status;

pub use crate::alert::api::*;
pub use crate::auth::api::*;
pub use crate::calendar::api::*;
pub use crate::dashboard::api::*;
pub use crate::integration::api::*;
pub use crate::reminder::api::*;
pub use crate::resource::api::*;
pub use crate::status::api::*;
