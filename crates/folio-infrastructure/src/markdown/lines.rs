//! Byte offset to line number mapping

/// Start offsets of every line in a text
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Index the line starts of `text`
    pub fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line containing byte `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }

    /// Number of lines in the text
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// True for an empty index (never happens; there is always line 1)
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}
