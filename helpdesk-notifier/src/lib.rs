//!
//! Foreground side of helpdesk push notifications:
//! notification feed, notification settings and push subscription life cycle.
//!

pub mod dto;
pub mod error;
pub mod model;
pub mod platform;
pub mod repository;
pub mod service;
