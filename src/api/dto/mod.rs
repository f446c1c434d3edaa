//! Data Transfer Objects for API requests and responses.
//!
//! Every JSON body carries a `status` field of `"OK"` or `"Error"`; see
//! [`response::ApiResponse`].

pub mod health;
pub mod response;
pub mod save;
