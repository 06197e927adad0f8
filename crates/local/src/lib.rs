#![forbid(unsafe_code)]

mod identity;
mod record;
mod store;

pub use identity::Identity;
pub use record::{StoredItem, expiry_in_days};
pub use store::ItemStore;
