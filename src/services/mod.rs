//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session state and identity-service calls so route
//! handlers can stay focused on forms, cookies and redirects.

pub mod auth;
pub mod forms;
pub mod notify;
pub mod session;
