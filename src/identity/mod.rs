//! Identity — adapter for the external authentication backend.
//!
//! DESIGN
//! ======
//! Account storage, password hashing and email confirmation belong to the
//! identity service. This module only speaks its HTTP API. The
//! `IdentityService` trait is the seam the auth context depends on, so tests
//! swap in a double without a network.

pub mod gotrue;
pub mod types;

pub use gotrue::GoTrueClient;
pub use types::{Identity, IdentityError, IdentityService, Role, SignIn};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
