//! Client side of the Fairwinds Base Image Finder.
//!
//! A [`report::Report`] lists the candidate base images of a container image,
//! the vulnerabilities known for each, and the upgrades that fix them.
//! [`report::render`] turns one into JSON, YAML or a sorted table.

pub mod client;
pub mod config;
pub mod error;
pub mod report;

pub use error::{FetchError, RenderError};
pub use report::{render, RenderOptions, Report};
