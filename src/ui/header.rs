//! Sticky header: brand, desktop navigation, language toggle, hamburger.
//!
//! Nav labels come from the page model, so they are already in the active
//! language by the time they render here.

use eframe::egui;

use crate::app::FarmSiteApp;
use crate::state::MOBILE_BREAKPOINT;

impl FarmSiteApp {
    pub fn render_header(&mut self, ctx: &egui::Context) {
        let mobile = ctx.screen_rect().width() < MOBILE_BREAKPOINT;

        // Snapshot nav entries up front; the click handlers need &mut self.
        let nav: Vec<(String, String, bool)> = self
            .document
            .by_class("header__nav-link")
            .map(|e| {
                (
                    e.text.clone(),
                    e.href().unwrap_or("").to_string(),
                    e.has_class("header__nav-link--active"),
                )
            })
            .collect();
        let toggle_label = format!(
            "\u{1F310} {}",
            self.controller.current().next().display_name()
        );

        let mut clicked_href: Option<String> = None;
        let mut toggle_language = false;
        let mut toggle_menu = false;

        let mut frame = egui::Frame::side_top_panel(&ctx.style());
        if self.header.is_scrolled() {
            frame = frame.shadow(egui::epaint::Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: egui::Color32::from_black_alpha(60),
            });
        }

        egui::TopBottomPanel::top("header")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("\u{1F404} Farm Fresh")
                            .size(20.0)
                            .strong(),
                    );
                    ui.add_space(16.0);

                    if mobile {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("\u{2630}").clicked() {
                                toggle_menu = true;
                            }
                        });
                    } else {
                        for (label, href, active) in &nav {
                            let text = if *active {
                                egui::RichText::new(label.as_str()).strong().underline()
                            } else {
                                egui::RichText::new(label.as_str())
                            };
                            if ui.link(text).clicked() {
                                clicked_href = Some(href.clone());
                            }
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(toggle_label.as_str()).clicked() {
                                toggle_language = true;
                            }
                        });
                    }
                });
            });

        if toggle_menu {
            self.menu_open = !self.menu_open;
        }
        if toggle_language {
            self.toggle_language();
        }
        if let Some(href) = clicked_href {
            self.follow_link(&href);
        }
    }
}
