//! Syntax tree types for resistance lists

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A node with its source span
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// One comma-separated entry as the grammar sees it
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A token that lexed as a number (not yet range-checked)
    Value(f64),
    /// Text that is not a number
    Invalid(String),
}

/// A validated, non-empty list of resistances in input order
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceList {
    pub values: Vec<Spanned<f64>>,
}

impl ResistanceList {
    /// Resistance values in ohms, input order preserved
    pub fn ohms(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.node).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
