//! Core library components.
//!
//! Parameter loading, secret derivation, store backends and the
//! provisioning loop. Nothing here prints to the terminal.

pub mod config;
pub mod constants;
pub mod provisioner;
pub mod secret;
pub mod store;
