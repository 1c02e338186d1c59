#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    /// Best-scoring candidates beyond this count are dropped.
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            result_limit: 50,
        }
    }
}
