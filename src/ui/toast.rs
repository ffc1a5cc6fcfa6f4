//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::FarmSiteApp;

impl FarmSiteApp {
    /// Render the toast stack in the bottom right corner. Expired toasts
    /// are dropped by the update loop; the ones still alive fade out over
    /// the grace period.
    pub fn render_toasts(&mut self, ctx: &egui::Context) {
        let margin = 20.0;
        let mut offset_y = -margin;

        for (index, toast) in self.toasts.iter().enumerate() {
            let alpha = toast.fade_alpha();
            let bg = toast.kind.color();
            let fg = toast.kind.text_color();
            let a = (alpha * 255.0) as u8;

            egui::Area::new(egui::Id::new(("toast", index)))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, offset_y))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(egui::Color32::from_rgba_unmultiplied(bg[0], bg[1], bg[2], a))
                        .corner_radius(8)
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .shadow(egui::epaint::Shadow {
                            offset: [2, 2],
                            blur: 8,
                            spread: 0,
                            color: egui::Color32::from_black_alpha((60.0 * alpha) as u8),
                        })
                        .show(ui, |ui| {
                            // Set min/max width for proper text wrapping
                            ui.set_min_width(200.0);
                            ui.set_max_width(400.0);
                            ui.label(
                                egui::RichText::new(toast.message.as_str())
                                    .color(egui::Color32::from_rgba_unmultiplied(
                                        fg[0], fg[1], fg[2], a,
                                    ))
                                    .size(14.0),
                            );
                        });
                });

            offset_y -= 56.0;
        }
    }
}
