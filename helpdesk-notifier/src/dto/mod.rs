//!
//! Module with all dtos exchanged with the backend.
//! `input` is received from the backend, `output` is sent to it.
//!

pub mod input;
pub mod output;
