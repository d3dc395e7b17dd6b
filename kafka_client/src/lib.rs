pub mod admin;
pub mod commands;
pub mod connection_settings;
pub mod consumer;
pub mod producer;
pub mod queries;
