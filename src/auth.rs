//! Admin authentication: a single configured account, checked server-side,
//! with a signed session cookie gating both admin pages and the admin API.

pub mod gate;
pub mod middleware;
pub mod session;
