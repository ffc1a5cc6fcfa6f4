//! Renders the current page's element model.
//!
//! Elements render in document order. Nav links are skipped here (the
//! header and mobile menu own them), product cards group the four elements
//! that follow their marker, and the contact form widgets render next to
//! their labels.

use eframe::egui;
use tracing::debug;

use crate::app::FarmSiteApp;
use crate::dom::{Element, Tag};

/// Elements following a product-card marker that belong to the card
const PRODUCT_CARD_SPAN: usize = 4;

impl FarmSiteApp {
    pub fn render_page(&mut self, ctx: &egui::Context) {
        let scroll_target = self.scroll_target.take();

        let mut clicked_href: Option<String> = None;
        let mut clicked_product: Option<(String, String)> = None;
        let mut submit = false;

        let document = &self.document;
        let form = &mut self.form;

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(720.0);
                        let elements = document.elements();
                        let mut i = 0;
                        while i < elements.len() {
                            let element = &elements[i];

                            if element.tag == Tag::Div && element.has_class("product-card") {
                                let end = (i + 1 + PRODUCT_CARD_SPAN).min(elements.len());
                                if let Some(product) =
                                    render_product_card(ui, element, &elements[i + 1..end])
                                {
                                    clicked_product = Some(product);
                                }
                                i = end;
                                continue;
                            }

                            match element.tag {
                                Tag::A if element.has_class("header__nav-link")
                                    || element.has_class("menu-link") => {}
                                Tag::H1 => {
                                    ui.label(
                                        egui::RichText::new(element.text.as_str())
                                            .size(30.0)
                                            .strong(),
                                    );
                                }
                                Tag::H2 => {
                                    ui.add_space(18.0);
                                    let response = ui.label(
                                        egui::RichText::new(element.text.as_str())
                                            .size(22.0)
                                            .strong(),
                                    );
                                    if let (Some(target), Some(id)) =
                                        (scroll_target.as_deref(), element.id.as_deref())
                                    {
                                        if target == id {
                                            response.scroll_to_me(Some(egui::Align::TOP));
                                        }
                                    }
                                }
                                Tag::H3 => {
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new(element.text.as_str())
                                            .size(17.0)
                                            .strong(),
                                    );
                                }
                                Tag::P => {
                                    if !element.text.is_empty() {
                                        ui.label(element.text.as_str());
                                    }
                                }
                                Tag::A => {
                                    if ui.link(element.text.as_str()).clicked() {
                                        clicked_href = element.href().map(str::to_string);
                                    }
                                }
                                Tag::Button => {
                                    ui.add_space(8.0);
                                    if element.id.as_deref() == Some("form-submit") {
                                        if ui.button(element.text.as_str()).clicked() {
                                            submit = true;
                                        }
                                    } else if ui.button(element.text.as_str()).clicked() {
                                        clicked_href = element.href().map(str::to_string);
                                    }
                                }
                                Tag::Label => {
                                    ui.add_space(8.0);
                                    ui.label(
                                        egui::RichText::new(element.text.as_str()).strong(),
                                    );
                                    match element.attr("for") {
                                        Some("name") => {
                                            ui.text_edit_singleline(&mut form.name);
                                        }
                                        Some("phone") => {
                                            ui.text_edit_singleline(&mut form.phone);
                                        }
                                        Some("email") => {
                                            ui.text_edit_singleline(&mut form.email);
                                        }
                                        _ => {}
                                    }
                                }
                                // Field widgets render with their labels.
                                Tag::Input => {}
                                Tag::TextArea => {
                                    let hint =
                                        element.attr("placeholder").unwrap_or("").to_string();
                                    ui.add(
                                        egui::TextEdit::multiline(&mut form.message)
                                            .hint_text(hint)
                                            .desired_rows(4),
                                    );
                                }
                                Tag::Div => {}
                            }
                            i += 1;
                        }
                    })
            })
            .inner;

        // Scroll events coalesce into the header's single pending update.
        let offset = output.state.offset.y;
        if (offset - self.last_scroll_offset).abs() > f32::EPSILON {
            self.last_scroll_offset = offset;
            self.header.on_scroll(offset);
        }

        if let Some((id, name)) = clicked_product {
            debug!(product_id = %id, product_name = %name, "Product card clicked");
        }
        if submit {
            self.submit_contact_form();
        }
        if let Some(href) = clicked_href {
            self.follow_link(&href);
        }
    }
}

/// Render one product card. Returns the card's product identity when the
/// card body (not a link or button inside it) was clicked.
fn render_product_card(
    ui: &mut egui::Ui,
    marker: &Element,
    inner: &[Element],
) -> Option<(String, String)> {
    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            for element in inner {
                match element.tag {
                    Tag::H3 => {
                        ui.label(
                            egui::RichText::new(element.text.as_str())
                                .size(17.0)
                                .strong(),
                        );
                    }
                    _ => {
                        ui.label(element.text.as_str());
                    }
                }
            }
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        let id = marker.attr("data-product-id").unwrap_or("").to_string();
        let name = marker.attr("data-product-name").unwrap_or("").to_string();
        return Some((id, name));
    }
    None
}
