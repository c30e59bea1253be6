//! # Services
//!
//! HTTP-facing logic of the review analyzer.
//!
//! ## Sub-modules:
//! - `reviews`: the request dispatcher registered as the application's default
//!   service. `GET` lists reviews ranked by sentiment and `POST` stores a new
//!   review. Any other method is answered with `405`.

pub mod reviews;
