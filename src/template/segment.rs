/// Whether a rendered piece of text came from real row data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Resolved,
    /// The row had no usable value: the text is a fallback or the raw marker.
    Unresolved,
}

/// A unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn resolved(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: SegmentKind::Resolved }
    }

    pub fn unresolved(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: SegmentKind::Unresolved }
    }

    pub fn is_resolved(&self) -> bool {
        self.kind == SegmentKind::Resolved
    }
}

/// Flattens segments into plain text for saving or copying.
///
/// The result is exactly the segment texts concatenated in order.
pub fn to_text(segments: &[Segment]) -> String {
    let mut text = String::with_capacity(segments.iter().map(|s| s.text.len()).sum());
    for segment in segments {
        text.push_str(&segment.text);
    }
    text
}

/// Number of segments flagged unresolved.
pub fn unresolved_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| !s.is_resolved()).count()
}
