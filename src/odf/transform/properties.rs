//! Attribute to property mapping.

use crate::odf::catalog::Catalog;
use crate::odf::elements::GenericNode;
use crate::odf::model::Property;

/// Maps raw attributes onto named properties using a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct PropertyMapper<'c> {
    catalog: &'c Catalog,
}

impl<'c> PropertyMapper<'c> {
    /// Create a mapper over the given catalog.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Map every attribute of `node`, in source order.
    ///
    /// Attributes known to the catalog take their display name; unknown ones
    /// keep their raw name. Nothing is dropped or merged.
    pub fn map_attributes(&self, node: &GenericNode) -> Vec<Property> {
        node.attributes()
            .iter()
            .map(|(name, value)| self.map_attribute(name, value))
            .collect()
    }

    /// Map a single attribute.
    pub fn map_attribute(&self, name: &str, value: &str) -> Property {
        let display = self.catalog.display_name_for(name).unwrap_or(name);
        Property::new(display, value)
    }
}
