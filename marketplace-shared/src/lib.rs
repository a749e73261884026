#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared building blocks for the marketplace web client.
//!
//! Everything here is target-agnostic: the same records, clients and
//! workflows run inside the browser bundle and in native tests.

pub mod access;
pub mod actions;
pub mod api;
pub mod catalog;
pub mod config;
pub mod forms;
pub mod models;
pub mod session;
