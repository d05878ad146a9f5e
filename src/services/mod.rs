//! Service layer for wishbox.
//!
//! - WishStore (create and list gift wishes)
//! - AccessGate (admin password and session tokens)

mod access_gate;
mod wishes;

pub use access_gate::AccessGate;
pub use wishes::WishStore;
