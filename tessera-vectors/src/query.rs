//! Search queries: free text, embedded on demand, or a literal vector.

/// What to rank documents against.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Embedded through the snapshot's embedding engine before scoring.
    Text(String),
    Vector(Vec<f32>),
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Query {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Vec<f32>> for Query {
    fn from(vector: Vec<f32>) -> Self {
        Self::Vector(vector)
    }
}

impl From<&[f32]> for Query {
    fn from(vector: &[f32]) -> Self {
        Self::Vector(vector.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for Query {
    fn from(vector: [f32; N]) -> Self {
        Self::Vector(vector.to_vec())
    }
}
