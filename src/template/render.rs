use crate::{
    data::Row,
    template::{
        parser::{Piece, Placeholder, Template},
        segment::{to_text, Segment},
    },
};

/// Renders a template against one row.
///
/// Never fails. A placeholder whose column is absent, null or an empty string
/// yields its fallback when one is given, otherwise its own `<<key>>` marker;
/// both are flagged [`Unresolved`](crate::template::SegmentKind::Unresolved).
pub fn render(template: &Template, row: &Row) -> Vec<Segment> {
    template
        .pieces()
        .iter()
        .map(|piece| match piece {
            Piece::Literal { text, .. } => Segment::resolved(text.clone()),
            Piece::Placeholder(placeholder) => resolve(placeholder, row),
        })
        .collect()
}

/// Renders a template against one row straight to plain text.
pub fn render_text(template: &Template, row: &Row) -> String {
    to_text(&render(template, row))
}

fn resolve(placeholder: &Placeholder, row: &Row) -> Segment {
    match row.get(&placeholder.key) {
        Some(value) if !value.is_missing() => Segment::resolved(value.to_string()),
        _ => match &placeholder.fallback {
            Some(fallback) => Segment::unresolved(fallback.clone()),
            None => Segment::unresolved(placeholder.marker()),
        },
    }
}

impl Template {
    pub fn render(&self, row: &Row) -> Vec<Segment> {
        render(self, row)
    }

    pub fn render_text(&self, row: &Row) -> String {
        render_text(self, row)
    }
}
