pub mod structure;
pub mod tree;

pub use structure::Structure;
pub use tree::tree;
