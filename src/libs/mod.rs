pub mod config;
pub mod controller;
pub mod data_storage;
pub mod messages;
pub mod state;
pub mod task;
pub mod view;
