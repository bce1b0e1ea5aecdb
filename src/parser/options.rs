//! Segmentation options and configuration.

/// Options controlling the segmentation quality gate.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Minimum share of the source text that must reach the report
    pub coverage_threshold: f32,

    /// Minimum number of detected sections
    pub min_sections: usize,

    /// Detected parts with less content than this (in characters) are
    /// treated as continuations of the previous section
    pub min_section_chars: usize,
}

impl SegmentOptions {
    /// Create new segment options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coverage threshold (clamped to 0.0..=1.0).
    pub fn with_coverage_threshold(mut self, threshold: f32) -> Self {
        self.coverage_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum number of detected sections.
    pub fn with_min_sections(mut self, count: usize) -> Self {
        self.min_sections = count;
        self
    }

    /// Set the minimum content length of a detected section.
    pub fn with_min_section_chars(mut self, chars: usize) -> Self {
        self.min_section_chars = chars;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            coverage_threshold: 0.8,
            min_sections: 2,
            min_section_chars: 20,
        }
    }
}
