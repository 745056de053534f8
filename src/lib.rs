//! Folio - A personal portfolio viewer written in Rust
//!
//! This library provides the content model, chart data plumbing and user
//! interface for a desktop portfolio application: a hero landing page with a
//! point-reveal illustration, a projects listing, per-project write-ups with
//! charts and tables, and a resume page.
//!
//! ## Module Structure
//!
//! - [`anim`] - Hero reveal animation state machine
//! - [`app`] - Main application state and eframe::App implementation
//! - [`content`] - Portfolio content model and the bundled catalog
//! - [`fmt`] - Legend/readout value and date formatting
//! - [`loader`] - Background loading of chart data files
//! - [`settings`] - User settings persistence
//! - [`state`] - Core data types and constants
//! - [`table`] - Whitespace-delimited data table parsing
//! - [`visibility`] - Series visibility state for chart legends
//! - [`ui`] - User interface components
//!   - `hero` - Landing page and reveal illustration
//!   - `projects` - Project card listing
//!   - `project_detail` - Project write-up pages
//!   - `sections` - Section content renderer and visualization dispatch
//!   - `data_chart` - Multi-series line charts with legend toggles
//!   - `histogram` - Hue distribution charts
//!   - `tables` - Comparison and benchmark tables
//!   - `experience` - Resume page
//!   - `toast` - Toast notification system

pub mod anim;
pub mod app;
pub mod content;
pub mod fmt;
pub mod loader;
pub mod settings;
pub mod state;
pub mod table;
pub mod ui;
pub mod visibility;
