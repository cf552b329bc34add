//! Update merger: folds transport payloads into user entities.
//!
//! - `user` - base user objects (full and "min")
//! - `status` - online status updates
//! - `user_full` - extended profile snapshots

mod status;
mod user;
mod user_full;

pub use status::{apply_user_status, lastseen_from_status};
pub use user::apply_user;
pub use user_full::apply_user_update;
