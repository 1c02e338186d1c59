pub(crate) mod candidate;
pub use candidate::{Candidate, CandidateId, CandidateIdError};

pub(crate) mod query;
pub use query::{Query, QueryError};

pub(crate) mod token;
pub use token::RequestToken;
