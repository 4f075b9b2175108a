//! Identity-domain identifiers, scope lists, and claim definitions.

pub mod claim;
pub mod id;
pub mod scope;

pub use claim::*;
pub use id::*;
pub use scope::*;
