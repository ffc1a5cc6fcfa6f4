//! Mobile navigation menu.
//!
//! Toggled by the header's hamburger button. Choosing a navigation entry
//! closes the menu; the language toggle leaves it open, matching the site.

use eframe::egui;
use tracing::debug;

use crate::app::FarmSiteApp;

impl FarmSiteApp {
    pub fn render_menu(&mut self, ctx: &egui::Context) {
        if !self.menu_open {
            return;
        }

        let links: Vec<(String, String)> = self
            .document
            .by_class("menu-link")
            .map(|e| (e.text.clone(), e.href().unwrap_or("").to_string()))
            .collect();
        if links.is_empty() {
            // Menu hooks missing from this page model; degrade to nothing.
            debug!("Mobile menu has no navigation links");
        }
        let toggle_label = format!(
            "\u{1F310} {}",
            self.controller.current().next().display_name()
        );

        let mut clicked_href: Option<String> = None;
        let mut toggle_language = false;

        egui::Area::new(egui::Id::new("mobile-menu"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 48.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(180.0);
                    for (label, href) in &links {
                        if ui.button(label.as_str()).clicked() {
                            clicked_href = Some(href.clone());
                        }
                    }
                    ui.separator();
                    if ui.button(toggle_label.as_str()).clicked() {
                        toggle_language = true;
                    }
                });
            });

        if toggle_language {
            self.toggle_language();
        }
        if let Some(href) = clicked_href {
            self.menu_open = false;
            self.follow_link(&href);
        }
    }
}
