#![deny(clippy::all, clippy::pedantic)]

pub mod dashboard;
pub mod employees;
pub mod inquiries;
pub mod profile;
