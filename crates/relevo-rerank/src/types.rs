use std::fmt;

#[derive(Debug, Clone)]
pub struct RerankRequest {
    pub query: String,
    pub documents: Vec<String>,
    /// Defaults to every document when unset.
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RerankItem {
    pub index: usize,
    pub score: f32,
}

#[derive(Debug, Clone)]
pub struct RerankResponse {
    pub provider: String,
    pub model: String,
    pub items: Vec<RerankItem>,
}

/// One candidate as placed by the ranking provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    /// 0-based position of the candidate in the input sequence.
    pub original_index: usize,
    pub relevance_score: f32,
    /// Caller-supplied label for the candidate, e.g. the model that wrote it.
    pub label: Option<String>,
    /// Candidate text cut to the service's preview length.
    pub snippet: String,
    /// Whether `snippet` is shorter than the candidate text.
    pub truncated: bool,
}

impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}: {:.4} - ",
            self.original_index + 1,
            self.relevance_score
        )?;
        if let Some(label) = &self.label {
            write!(f, "{label} - ")?;
        }
        f.write_str(&self.snippet)?;
        if self.truncated {
            f.write_str("...")?;
        }
        Ok(())
    }
}
