//! Texweave CLI library.
//!
//! Command implementations live here so they can be tested directly; the
//! `texweave` binary is a thin argument-parsing shell over this crate.

pub mod commands;
pub mod input;
