//! Generate randomized command scripts for testing moving-average services.
//!
//! A script is a CSV file of `add`/`get` commands for a set of actions, mixed
//! according to a [`Balance`] policy and closed by a `sync` barrier plus one
//! expected-average assertion per action.

pub mod command;
pub mod commands;
pub mod csv_io;
pub mod error;
pub mod generator;
pub mod logging;

pub use command::{Balance, TestCommand, Verb};
pub use error::{GenError, Result};
pub use generator::{generate, GenerateOptions, GeneratedTest};
