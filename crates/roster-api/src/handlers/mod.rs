//! HTTP request handlers.

pub mod admin;
pub mod availability;
pub mod feed;
pub mod health;
pub mod me;
pub mod pages;
