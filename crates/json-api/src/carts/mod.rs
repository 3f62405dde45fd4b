//! Cart endpoints

mod errors;
mod handlers;
pub(crate) mod items;
pub(crate) mod models;
mod requests;

pub(crate) use handlers::{create, delete, get};
