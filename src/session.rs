//! The "active dataset, selected row, template text" state as an immutable
//! snapshot.
//!
//! Every transition returns a new [`Session`]; the dataset is shared behind an
//! `Arc`, so rows, schema and highlights are always read from one consistent
//! fetch.

use crate::{
    data::{Dataset, Row, Schema},
    template::{classify, Highlight, Segment, Template},
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Session {
    dataset: Option<Arc<Dataset>>,
    current: usize,
    template: Template,
}

/// What the preview pane shows for the selected row.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub segments: Vec<Segment>,
    /// 1-based position of the row.
    pub position: usize,
    pub total: usize,
}

impl Preview {
    /// `"3 / 10"` style pager label.
    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

impl Session {
    pub fn new(template: impl Into<String>) -> Self {
        Self { dataset: None, current: 0, template: Template::parse(template) }
    }

    /// Replaces the dataset and selects its first row.
    pub fn with_dataset(&self, dataset: Dataset) -> Self {
        Self { dataset: Some(Arc::new(dataset)), current: 0, template: self.template.clone() }
    }

    /// Replaces the template text, keeping dataset and selection.
    pub fn with_template(&self, template: impl Into<String>) -> Self {
        Self {
            dataset: self.dataset.clone(),
            current: self.current,
            template: Template::parse(template),
        }
    }

    /// Selects a 0-based row, clamped to the dataset.
    pub fn select(&self, index: usize) -> Self {
        let last = self.dataset.as_ref().map_or(0, |d| d.len().saturating_sub(1));
        Self { current: index.min(last), ..self.clone() }
    }

    pub fn next(&self) -> Self {
        self.select(self.current.saturating_add(1))
    }

    pub fn prev(&self) -> Self {
        self.select(self.current.saturating_sub(1))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_deref()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// 0-based index of the selected row.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_row(&self) -> Option<&Row> {
        self.dataset().and_then(|d| d.rows().get(self.current))
    }

    /// Schema of the active dataset, empty before the first fetch.
    pub fn schema(&self) -> Schema {
        self.dataset().map(|d| d.schema().clone()).unwrap_or_default()
    }

    /// Renders the selected row, or `None` when nothing has been fetched yet.
    pub fn preview(&self) -> Option<Preview> {
        let dataset = self.dataset()?;
        let row = dataset.rows().get(self.current)?;
        Some(Preview {
            segments: self.template.render(row),
            position: self.current + 1,
            total: dataset.len(),
        })
    }

    /// Placeholder highlights for the template against the active schema.
    pub fn highlights(&self) -> Vec<Highlight> {
        match self.dataset() {
            Some(dataset) => classify(&self.template, dataset.schema()),
            None => classify(&self.template, &Schema::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{to_text, Classification};

    fn dataset(titles: &[&str]) -> Dataset {
        Dataset::new(titles.iter().map(|t| [("title", *t)].into_iter().collect()).collect())
            .unwrap()
    }

    #[test]
    fn nothing_to_preview_before_fetch() {
        let session = Session::new("<<title>>");
        assert!(session.preview().is_none());
        assert!(session.current_row().is_none());
        assert_eq!(session.highlights()[0].classification, Classification::Unknown);
    }

    #[test]
    fn new_dataset_resets_selection() {
        let session = Session::new("<<title>>").with_dataset(dataset(&["A", "B", "C"])).next();
        assert_eq!(session.current(), 1);
        let session = session.with_dataset(dataset(&["X", "Y"]));
        assert_eq!(session.current(), 0);
        assert_eq!(session.preview().unwrap().label(), "1 / 2");
    }

    #[test]
    fn paging_clamps_at_both_ends() {
        let session = Session::new("<<title>>").with_dataset(dataset(&["A", "B"]));
        let session = session.prev();
        assert_eq!(session.current(), 0);
        let session = session.next().next().next();
        assert_eq!(session.current(), 1);
        let preview = session.preview().unwrap();
        assert_eq!(to_text(&preview.segments), "B");
        assert_eq!(preview.label(), "2 / 2");
    }

    #[test]
    fn transitions_leave_the_original_untouched() {
        let first = Session::new("<<title>>").with_dataset(dataset(&["A", "B"]));
        let second = first.next().with_template("[<<title>>]");
        assert_eq!(first.current(), 0);
        assert_eq!(first.template().source(), "<<title>>");
        assert_eq!(to_text(&second.preview().unwrap().segments), "[B]");
    }

    #[test]
    fn highlights_ignore_the_selected_row() {
        let session = Session::new("<<title>> <<bpm>>").with_dataset(dataset(&["A", "B"]));
        assert_eq!(session.highlights(), session.next().highlights());
        let classes: Vec<_> = session.highlights().iter().map(|h| h.classification).collect();
        assert_eq!(classes, vec![Classification::Known, Classification::Unknown]);
    }
}
