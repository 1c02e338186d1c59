use nutype::nutype;

/// Search text that is safe to send to a backend: trimmed and non-empty.
///
/// A blank input never becomes a `Query`, so it cannot reach a
/// [`SearchClient`](crate::client::SearchClient).
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
    )
)]
pub struct Query(String);

impl Query {
    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.chars().count()
    }
}
