//! FarmSite - offline-capable bilingual client for the Farm Fresh dairy site
//!
//! The site's four pages are consumed as element models and rendered
//! natively; a dictionary-driven language controller rewrites the visible
//! strings in place when the language changes, without rebuilding the page.
//!
//! ## Module Structure
//!
//! - [`app`] - Main application state and eframe::App implementation
//! - [`controller`] - Language selection, translation passes, persistence
//! - [`dom`] - Element/page model consumed from the site markup
//! - [`form`] - Contact form capture (no backend yet)
//! - [`mod@i18n`] - Languages and the embedded translation dictionary
//! - [`offline`] - Versioned offline cache for the site bundle
//! - [`pages`] - Page identity and the per-page element models
//! - [`settings`] - User settings persistence
//! - [`state`] - Shared constants and small UI state types
//! - [`ui`] - User interface components
//!   - `header` - sticky header, desktop nav, language toggle
//!   - `menu` - mobile navigation overlay
//!   - `page_view` - element-model renderer and contact form
//!   - `toast` - toast notification stack

pub mod app;
pub mod controller;
pub mod dom;
pub mod form;
pub mod i18n;
pub mod offline;
pub mod pages;
pub mod settings;
pub mod state;
pub mod ui;
