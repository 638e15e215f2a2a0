//! restcall is a small set of helpers for making REST API calls: build a
//! request, attach a bearer-token authorization header, send it, and parse
//! the JSON response.
//!
//! The issuers in [`pretty`] additionally print the full request before it is
//! sent, which makes the web traffic visible in demos and API walkthroughs.
//! The issuers in [`rest`] are the quiet versions an application would use.
//!
//! # Example
//!
//! See demos/pretty_demo.rs
//!
//! ```no_run
#![doc = include_str!("../demos/pretty_demo.rs")]
//! ```

mod display;
pub use display::*;

mod errors;
pub use errors::*;

mod headers;
pub use headers::*;

mod response;
pub use response::*;

pub mod pretty;
pub use pretty::*;

pub mod rest;
pub use rest::*;

pub use serde;
pub use serde_json;
pub use thiserror;
pub use tokio;
