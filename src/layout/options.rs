//! Layout options and page geometry.

use crate::error::{Error, Result};

/// Page geometry in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Left margin
    pub margin_left: f32,

    /// Right margin
    pub margin_right: f32,

    /// Vertical offset where content starts on a fresh page
    pub margin_top: f32,

    /// Space below the content area; footers live in this band
    pub margin_bottom: f32,

    /// Distance of the footer rule from the bottom edge
    pub footer_rule_offset: f32,

    /// Distance of the footer baseline from the bottom edge
    pub footer_text_offset: f32,
}

impl PageSpec {
    /// A4 portrait with the report's margins.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_left: 20.0,
            margin_right: 20.0,
            margin_top: 40.0,
            margin_bottom: 50.0,
            footer_rule_offset: 25.0,
            footer_text_offset: 15.0,
        }
    }

    /// US Letter portrait with the report's margins.
    pub fn letter() -> Self {
        Self {
            width: 215.9,
            height: 279.4,
            ..Self::a4()
        }
    }

    /// Width available to text.
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Lowest vertical offset content may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin_bottom
    }

    /// Height available to content on one page.
    pub fn printable_height(&self) -> f32 {
        self.bottom_limit() - self.margin_top
    }

    /// Reject geometries without a usable content area.
    pub fn validate(&self) -> Result<()> {
        if self.content_width() <= 0.0 {
            return Err(Error::Config(format!(
                "horizontal margins ({} + {}) leave no room on a {}mm page",
                self.margin_left, self.margin_right, self.width
            )));
        }
        if self.printable_height() <= 0.0 {
            return Err(Error::Config(format!(
                "vertical margins ({} + {}) leave no room on a {}mm page",
                self.margin_top, self.margin_bottom, self.height
            )));
        }
        Ok(())
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::a4()
    }
}

/// Font sizes (points) and vertical rhythm (millimetres).
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    /// Section title font size
    pub title_size: f32,

    /// Height of one section title line
    pub title_line_height: f32,

    /// Space between a title block and its first paragraph
    pub title_spacing: f32,

    /// Body font size
    pub body_size: f32,

    /// Height of one body line
    pub body_line_height: f32,

    /// Space between paragraphs
    pub paragraph_spacing: f32,

    /// Space before a section title when sections flow continuously
    pub section_spacing: f32,

    /// Footer font size
    pub footer_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_size: 16.0,
            title_line_height: 10.0,
            title_spacing: 10.0,
            body_size: 10.0,
            body_line_height: 7.0,
            paragraph_spacing: 8.0,
            section_spacing: 15.0,
            footer_size: 8.0,
        }
    }
}

/// Where report sections start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBreak {
    /// Every section, the first included, starts on a fresh page
    #[default]
    FreshPage,
    /// Sections flow one after another; a title only moves to a new page
    /// when it would not fit together with its first line
    Continuous,
}

/// Options for laying out a report.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Page geometry
    pub page: PageSpec,

    /// Fonts and spacing
    pub typography: Typography,

    /// Section break policy
    pub section_break: SectionBreak,

    /// Emit a cover page
    pub cover_page: bool,

    /// Emit a table of contents page
    pub table_of_contents: bool,

    /// Emit the closing letter
    pub closing_page: bool,

    /// Draw footers on every page but the cover
    pub footers: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageSpec) -> Self {
        self.page = page;
        self
    }

    /// Set the typography.
    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    /// Set the section break policy.
    pub fn with_section_break(mut self, policy: SectionBreak) -> Self {
        self.section_break = policy;
        self
    }

    /// Enable or disable the cover page.
    pub fn with_cover_page(mut self, enabled: bool) -> Self {
        self.cover_page = enabled;
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_table_of_contents(mut self, enabled: bool) -> Self {
        self.table_of_contents = enabled;
        self
    }

    /// Enable or disable the closing letter.
    pub fn with_closing_page(mut self, enabled: bool) -> Self {
        self.closing_page = enabled;
        self
    }

    /// Enable or disable footers.
    pub fn with_footers(mut self, enabled: bool) -> Self {
        self.footers = enabled;
        self
    }

    /// Body pages only: no cover, contents or closing page.
    pub fn content_only(self) -> Self {
        self.with_cover_page(false)
            .with_table_of_contents(false)
            .with_closing_page(false)
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page: PageSpec::a4(),
            typography: Typography::default(),
            section_break: SectionBreak::FreshPage,
            cover_page: true,
            table_of_contents: true,
            closing_page: true,
            footers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry() {
        let page = PageSpec::a4();
        assert_eq!(page.content_width(), 170.0);
        assert_eq!(page.bottom_limit(), 247.0);
        assert_eq!(page.printable_height(), 207.0);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_invalid_geometry() {
        let page = PageSpec {
            margin_top: 200.0,
            margin_bottom: 100.0,
            ..PageSpec::a4()
        };
        assert!(matches!(page.validate(), Err(Error::Config(_))));

        let page = PageSpec {
            margin_left: 150.0,
            ..PageSpec::a4()
        };
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_layout_options_builder() {
        let options = LayoutOptions::new()
            .with_section_break(SectionBreak::Continuous)
            .content_only()
            .with_footers(false);

        assert_eq!(options.section_break, SectionBreak::Continuous);
        assert!(!options.cover_page);
        assert!(!options.table_of_contents);
        assert!(!options.closing_page);
        assert!(!options.footers);
    }

    #[test]
    fn test_default_options() {
        let options = LayoutOptions::default();
        assert_eq!(options.section_break, SectionBreak::FreshPage);
        assert!(options.cover_page);
        assert!(options.footers);
    }
}
