use crate::{
    data::Schema,
    template::parser::{Span, Template},
};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The key names a column of the active dataset.
    Known,
    Unknown,
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Known => f.write_str("known"),
            Classification::Unknown => f.write_str("unknown"),
        }
    }
}

/// Classification of one placeholder occurrence, positioned in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub span: Span,
    pub key: String,
    pub classification: Classification,
}

impl Highlight {
    pub fn is_known(&self) -> bool {
        self.classification == Classification::Known
    }
}

/// Classifies every placeholder of `template` against `schema`.
///
/// Only keys are checked, never fallbacks or row values, so the result for a
/// given template and schema is the same whichever row is on display. With an
/// empty schema everything is unknown.
pub fn classify(template: &Template, schema: &Schema) -> Vec<Highlight> {
    template
        .placeholders()
        .map(|placeholder| Highlight {
            span: placeholder.span,
            key: placeholder.key.clone(),
            classification: if schema.contains(&placeholder.key) {
                Classification::Known
            } else {
                Classification::Unknown
            },
        })
        .collect()
}

/// Keys of `template` the schema does not know, deduplicated, in order.
pub fn unknown_keys<'t>(template: &'t Template, schema: &Schema) -> Vec<&'t str> {
    template.keys().into_iter().filter(|key| !schema.contains(key)).collect()
}
