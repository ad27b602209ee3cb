//! Signature model for the vstim testbench generator.
//!
//! This crate defines the types produced by signature extraction and consumed
//! by harness synthesis: [`ModuleSignature`] with its ordered [`Port`] list,
//! plus the optional [`ClockInfo`]/[`ResetInfo`] classification results that
//! decide whether a module is driven as sequential or combinational.

#![warn(missing_docs)]

pub mod control;
pub mod port;
pub mod signature;

pub use control::{ClockInfo, ResetInfo, ResetLevel};
pub use port::{Port, PortDirection, PortWidth};
pub use signature::ModuleSignature;
