//! API handlers for Scanshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
