//! Bar rendering models

/// One rendered row: the input pair plus its scaled bar
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBar {
    pub label: String,
    pub value: f64,
    pub length: usize,
    pub bar: String,
}
