//! # CLI Module
//!
//! Command-line access to the generator: dump the documents a server would
//! return, or lint a resource definitions file before deploying it.
//!
//! ## Commands
//!
//! ### `catalog`
//!
//! Print the resource listing for a definitions file as it would be served at
//! the given URL:
//!
//! ```bash
//! restdoc catalog --resources resources.yaml --url http://localhost:8012/api/documentation
//! ```
//!
//! ### `resource`
//!
//! Print one resource's documentation:
//!
//! ```bash
//! restdoc resource --resources resources.yaml --name geese \
//!     --url http://localhost:8012/api/documentation/geese
//! ```
//!
//! Both accept `--config <FILE>` (YAML or JSON [`GeneratorConfig`]) and
//! `--pretty`. Documents go to stdout, logs to stderr.
//!
//! ### `lint`
//!
//! ```bash
//! restdoc lint --resources resources.yaml --fail-on-error
//! ```
//!
//! [`GeneratorConfig`]: crate::config::GeneratorConfig

mod commands;


pub use commands::{run_cli, run_command, Cli, Commands};
