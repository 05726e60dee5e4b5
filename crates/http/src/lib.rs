//! Pageauth HTTP module
//!
//! Wire types for the login endpoint and, behind the `client` feature, the
//! client that performs the login POST and the bearer-authenticated page GET.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

pub use types::{LoginForm, LoginReply, LoginResponse, PageResponse};

#[cfg(feature = "client")]
pub use client::{AuthClient, AuthClientBuilder, error::ClientError};
