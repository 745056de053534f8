//! UI rendering modules for the Folio application.
//!
//! This module organizes the various UI components into logical submodules:
//!
//! - `nav` - Top navigation bar and settings menu
//! - `hero` - Landing page: reveal illustration, intro text, contact dialog
//! - `projects` - Project card listing page
//! - `project_detail` - Project write-up page (header, TOC, sections)
//! - `sections` - Section content renderer and visualization dispatch
//! - `data_chart` - Multi-series line charts with legend visibility toggles
//! - `histogram` - Hue distribution charts over the fixed sample series
//! - `tables` - Comparison and benchmark table renderers
//! - `experience` - Resume page
//! - `figure` - Framed image widget with missing-file placeholder
//! - `toast` - Toast notification system
//! - `style` - Shared colors and framed-card helpers

pub mod data_chart;
pub mod experience;
pub mod figure;
pub mod hero;
pub mod histogram;
pub mod nav;
pub mod project_detail;
pub mod projects;
pub mod sections;
pub mod style;
pub mod tables;
pub mod toast;
