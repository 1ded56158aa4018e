//! # stage-router
//!
//! Routes the files staged for a git commit to the pre-commit checks that
//! cover them.
//!
//! A route table groups staged files by glob. Each group runs one `make`
//! target in a sub-directory, either forwarding its files as named
//! `name="a b"` arguments selected by pattern rules, or running a fixed
//! command.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//!
//! use stage_router::config::RouteConfig;
//!
//! let router = RouteConfig::defaults()?.compile()?;
//! let plan = router.plan(Path::new("/repo"), &["/repo/api/openapi.yaml"]);
//! assert_eq!(plan[0].to_string(), "cd ./api && make lint-spectral");
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod git;
pub mod router;
pub mod runner;

pub use crate::cli::Cli;
pub use crate::error::RouterError;
pub use crate::router::{CommandLine, Router};
