//! Provides handlers for the command line actions.
//!
//! Takes care of most of the actual application logic, throws errors and writes to the disk. It is
//! split into `control` for starting, stopping and aborting work periods, `status` for reporting
//! tracked time and `config` for tuning the configuration.

pub mod config;
pub mod control;
pub mod status;
