//! Catalog-driven transformation from generic nodes to semantic elements.

pub mod builder;
pub mod properties;

pub use builder::TreeBuilder;
pub use properties::PropertyMapper;
