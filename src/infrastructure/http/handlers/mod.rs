//! HTTP Handlers

mod files;
mod ping;
mod translate;

pub use files::*;
pub use ping::*;
pub use translate::*;
