//! Library entry for contrastscan: WCAG 2.0 contrast maths, stylesheet colour extraction,
//! compliance scanning and compliant-colour search.

pub mod color;
pub mod config;
pub mod scan;
pub mod search;
pub mod style;

pub use color::{ContrastError, HexColor, MIN_COMPLIANT_RATIO, contrast};
pub use scan::{ComplianceReport, ScanOptions, scan};
pub use search::{SearchPolicy, find_alternate};
pub use style::{StyleMap, extract_color_pairs};
