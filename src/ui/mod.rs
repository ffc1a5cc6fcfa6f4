//! UI rendering modules for the FarmSite application.
//!
//! The page body is rendered straight from the current page's element
//! model, so whatever the language controller wrote into the model is what
//! shows up on screen.
//!
//! - `header` - sticky top bar with desktop nav, hamburger, language toggle
//! - `menu` - mobile navigation overlay
//! - `page_view` - element-model renderer, contact form, product cards
//! - `toast` - stacked toast notifications

pub mod header;
pub mod menu;
pub mod page_view;
pub mod toast;
