//! staffdesk: review client for the employee-management backend.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
