//! Fuzzy backend over an in-memory candidate set.

use crate::config::{CaseMatching, SearchConfig};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};
use std::sync::Mutex;
use tracing::trace;
use typeahead_core::{Backend, Candidate, CandidateId, Query, SearchError};

/// Ranks candidates against a query with nucleo's fuzzy matcher.
///
/// Both labels are matched as one haystack. Ties keep insertion order.
pub struct FuzzyBackend {
    candidates: Vec<Candidate>,
    config: SearchConfig,
    /// Matcher scratch space is reused across searches.
    matcher: Mutex<Matcher>,
}

/// Create operations.
impl FuzzyBackend {
    pub fn new(candidates: Vec<Candidate>, config: SearchConfig) -> Self {
        let mut backend = Self {
            candidates: Vec::with_capacity(candidates.len()),
            config,
            matcher: Mutex::new(Matcher::new(NucleoConfig::DEFAULT)),
        };

        for candidate in candidates {
            backend.insert(candidate);
        }

        backend
    }
}

/// Mutation operations.
impl FuzzyBackend {
    /// Adds a candidate, replacing any existing one with the same id in place.
    pub fn insert(&mut self, candidate: Candidate) {
        match self.position(candidate.id()) {
            Some(index) => self.candidates[index] = candidate,
            None => self.candidates.push(candidate),
        }
    }

    pub fn remove(&mut self, id: &CandidateId) -> Option<Candidate> {
        self.position(id).map(|index| self.candidates.remove(index))
    }
}

/// Read operations.
impl FuzzyBackend {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, id: &CandidateId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &CandidateId) -> Option<usize> {
        self.candidates.iter().position(|c| c.id() == id)
    }
}

/// Search operations.
impl FuzzyBackend {
    fn pattern(&self, query: &Query) -> Pattern {
        let case_matching = match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if self.config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        Pattern::parse(query.as_str(), case_matching, normalization)
    }
}

impl Backend for FuzzyBackend {
    fn search(&self, query: &Query) -> Result<Vec<Candidate>, SearchError> {
        let pattern = self.pattern(query);
        let mut matcher = self
            .matcher
            .lock()
            .map_err(|_| SearchError::failed("fuzzy matcher poisoned"))?;

        let mut buf = Vec::new();
        let mut scored: Vec<(u32, &Candidate)> = self
            .candidates
            .iter()
            .filter_map(|candidate| {
                let haystack = haystack(candidate);
                pattern
                    .score(Utf32Str::new(&haystack, &mut buf), &mut matcher)
                    .map(|score| (score, candidate))
            })
            .collect();

        // Stable sort: equal scores stay in insertion order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        trace!(query = %query, matched = scored.len(), "fuzzy search");

        Ok(scored
            .into_iter()
            .take(self.config.result_limit)
            .map(|(_, candidate)| candidate.clone())
            .collect())
    }
}

pub(crate) fn haystack(candidate: &Candidate) -> String {
    let secondary = candidate.secondary_label().trim();
    if secondary.is_empty() {
        candidate.primary_label().to_string()
    } else {
        format!("{} {}", candidate.primary_label(), secondary)
    }
}
