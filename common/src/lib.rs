pub mod address;
pub mod config;
pub mod identity;
pub mod permissions;
pub mod time;
pub mod workflow;
