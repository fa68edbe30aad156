//! The `<<key>>` / `<<key|fallback>>` template engine.
//!
//! - `parser`: turns template text into literal and placeholder pieces
//! - `render`: substitutes one row into a parsed template
//! - `segment`: rendered output units and the plain-text serializer
//! - `validate`: classifies placeholder keys against a dataset schema

pub mod parser;
pub mod render;
pub mod segment;
pub mod validate;

pub use parser::{parse, Piece, Placeholder, Span, Template};
pub use render::{render, render_text};
pub use segment::{to_text, unresolved_count, Segment, SegmentKind};
pub use validate::{classify, unknown_keys, Classification, Highlight};
