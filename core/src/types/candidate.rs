use crate::error::CandidateError;
use nutype::nutype;
use serde::{Deserialize, Serialize};

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct CandidateId(String);

/// A single record returned by a search backend.
///
/// Fields are private so a received candidate cannot be edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    id: CandidateId,
    primary_label: String,
    #[serde(default)]
    secondary_label: String,
}

impl Candidate {
    pub fn new(
        id: CandidateId,
        primary_label: impl Into<String>,
        secondary_label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            primary_label: primary_label.into(),
            secondary_label: secondary_label.into(),
        }
    }

    /// Builds a candidate from a raw id, rejecting blank ids.
    pub fn try_new(
        id: &str,
        primary_label: impl Into<String>,
        secondary_label: impl Into<String>,
    ) -> Result<Self, CandidateError> {
        let id = CandidateId::try_from(id)?;
        Ok(Self::new(id, primary_label, secondary_label))
    }

    /// Decodes a JSON array of candidates, as returned by a typical HTTP backend.
    pub fn list_from_json(payload: &str) -> Result<Vec<Self>, CandidateError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn id(&self) -> &CandidateId {
        &self.id
    }

    pub fn primary_label(&self) -> &str {
        &self.primary_label
    }

    pub fn secondary_label(&self) -> &str {
        &self.secondary_label
    }

    /// Text written back into the input when this candidate is committed.
    pub fn label(&self) -> String {
        let secondary = self.secondary_label.trim();
        if secondary.is_empty() {
            self.primary_label.clone()
        } else {
            format!("{}, {}", self.primary_label, secondary)
        }
    }
}

#[cfg(test)]
mod tests;
