//! Decoder and lookup service for SIGAA-style class schedule codes.
//!
//! The heart of the crate is [`schedule`], which turns compact codes such as
//! `35M12` into readable descriptions and atomic occupancy keys. [`catalog`]
//! loads the class list and answers (day, time) lookups; [`server`] exposes
//! both over a small HTTP API.

pub mod catalog;
pub mod schedule;
pub mod server;
pub mod types;
