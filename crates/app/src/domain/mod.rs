//! Cart Domain Concerns

pub mod carts;
