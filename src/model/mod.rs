//! Report model types.
//!
//! These types carry data between the pipeline stages: the subject profile
//! and company branding that personalise a report, the sections produced by
//! segmentation, and the finished report handed back to the caller.

mod company;
mod context;
mod profile;
mod report;
mod section;

pub use company::CompanyInfo;
pub use context::ReportContext;
pub use profile::SubjectProfile;
pub use report::{report_filename, sanitize_name, GeneratedReport};
pub use section::{
    placeholder_content, ReportSection, CANONICAL_SECTIONS, EXECUTIVE_SUMMARY, FULL_CONTENT_TITLE,
};
