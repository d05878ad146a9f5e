//! Middleware for wishbox.
//!
//! - `admin_session` - session token check for the JSON admin API

mod admin_session;

pub use admin_session::{
    require_admin_session, AdminSession, ADMIN_SESSION_HEADER, ADMIN_SESSION_PARAM,
};
