//! Types and rules shared by the dashboard UI.
//!
//! Nothing in this crate performs I/O: the remote API owns every entity and
//! the frontend only holds render-scoped copies of them.

pub mod dashboards;
pub mod domain;
pub mod shared;
