pub mod config;
pub mod data_storage;
pub mod filter;
pub mod guard;
pub mod messages;
pub mod task;
pub mod token;
pub mod validate;
pub mod view;
