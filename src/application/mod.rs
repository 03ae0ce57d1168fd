//! Application services: the inquiry review workflow and profile lookups.

pub mod error;
pub mod inquiries;
pub mod modals;
pub mod notices;
pub mod profile;
pub mod remote;
