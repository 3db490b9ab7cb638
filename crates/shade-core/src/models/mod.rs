//! Data models for the Shade API
//!
//! Request bodies are serialized with the field names the API expects;
//! response types only declare the fields this crate reads.

mod asset;
mod folder;
mod lookup;
mod metadata;
mod share;
mod upload;
mod workspace;

pub use asset::*;
pub use folder::*;
pub use lookup::*;
pub use metadata::*;
pub use share::*;
pub use upload::*;
pub use workspace::*;
