pub mod dto;
pub mod error;
pub mod platform;
pub mod service;
