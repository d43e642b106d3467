//! HR toolkit library
//!
//! Random prize draws, random group assignment and a persisted log of past
//! operations over an in-memory roster. Pure selection logic lives in
//! [`core`](crate::core); persistence and the creative-text service sit behind the traits
//! in [`traits`] and are wired together by [`Toolkit`].

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod toolkit;
pub mod traits;

pub use config::ToolkitConfig;
pub use crate::core::{DrawRequest, DuplicateReport, ExportRows, GroupExportRow, WinnerExportRow};
pub use error::{ToolkitError, ToolkitResult};
pub use services::*;
pub use toolkit::{DrawOutcome, GroupingOutcome, Toolkit};
pub use traits::*;
