use crate::types::Candidate;

/// The dropdown model: latest results, visibility, and keyboard highlight.
///
/// Only the controller mutates a store; views and the navigator read it.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Vec<Candidate>,
    is_open: bool,
    highlighted: Option<usize>,
}

/// Read operations.
impl ResultStore {
    pub fn results(&self) -> &[Candidate] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// `None` means nothing is highlighted.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted(&self) -> Option<&Candidate> {
        self.highlighted.and_then(|index| self.results.get(index))
    }
}

/// Mutation operations.
impl ResultStore {
    /// Installs a fresh result list; opens the dropdown when there is something to show.
    pub(crate) fn replace(&mut self, results: Vec<Candidate>) {
        self.is_open = !results.is_empty();
        self.results = results;
        self.highlighted = None;
    }

    pub(crate) fn clear(&mut self) {
        self.results.clear();
        self.is_open = false;
        self.highlighted = None;
    }

    pub(crate) fn open(&mut self) {
        self.is_open = true;
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
        self.highlighted = None;
    }

    /// Ignores indices outside `results`. Returns whether the highlight was applied.
    pub(crate) fn set_highlight(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) if i >= self.results.len() => false,
            _ => {
                self.highlighted = index;
                true
            }
        }
    }
}
