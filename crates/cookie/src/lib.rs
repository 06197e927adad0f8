#![forbid(unsafe_code)]

mod date;
mod jar;
mod options;
mod source;

pub use jar::CookieJar;
pub use options::{CookieOptions, Expiry};
pub use source::{CookieSource, MemoryCookieSource};
