//! Implementation blocks for configuration structures.

pub mod cache_config;

pub mod configuration;

pub mod configuration_error;

pub mod error_messages;

pub mod server_address;
