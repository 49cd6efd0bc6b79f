//! Things that only run on the server (reading the config and talking to the data gateway)
//!
//! The browser never talks to the gateway directly; every page goes through a server function
//! that ends up in [`content`].
pub mod config;
pub mod content;
pub mod gateway;
pub mod signal_handler;
