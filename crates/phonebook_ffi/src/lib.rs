//! Flutter bridge for the phone book core.

pub mod api;
