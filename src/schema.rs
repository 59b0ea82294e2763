use core::fmt;

use indexmap::IndexMap;

use crate::datatype::AnyDatatype;

/// An ordered mapping from field name to datatype, driving the
/// object-level batch operations on [`crate::QueryParams`].
///
/// Field order is the order fields were added;
/// [`crate::QueryParams::try_get_obj`] visits fields in that order.
#[derive(Default)]
pub struct Schema {
    fields: IndexMap<String, Box<dyn AnyDatatype>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style. Re-adding a name replaces its datatype.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, datatype: impl AnyDatatype + 'static) -> Self {
        self.fields.insert(name.into(), Box::new(datatype));
        self
    }

    /// The datatype registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&dyn AnyDatatype> {
        self.fields.get(name).map(Box::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn AnyDatatype)> {
        self.fields
            .iter()
            .map(|(name, datatype)| (name.as_str(), datatype.as_ref()))
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(name, datatype)| (name, datatype.type_name())))
            .finish()
    }
}
