//! Main application state and eframe::App implementation.
//!
//! One `FarmSiteApp` is one browsing session: it owns the language
//! controller, the currently loaded page model, the contact form, and the
//! transient UI state (toasts, menu, header). Navigating rebuilds the page
//! model from scratch and re-applies the active language, the same way a
//! full document reload would.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use anyhow::Context;
use eframe::egui;
use tracing::{error, info, warn};

use crate::controller::LanguageController;
use crate::dom::Document;
use crate::form::ContactForm;
use crate::i18n::EmbeddedSource;
use crate::offline::{DirSource, HttpSource, OfflineCache, PrecacheReport};
use crate::pages::PageKind;
use crate::settings::UserSettings;
use crate::state::{LoadingState, StickyHeader, Toast, ToastKind, SITE_BASE_URL};

/// Main application state
pub struct FarmSiteApp {
    /// Language selection and translation passes
    pub(crate) controller: LanguageController,
    /// Which page is loaded
    pub(crate) current_page: PageKind,
    /// The loaded page's element model
    pub(crate) document: Document,
    /// Contact form fields
    pub(crate) form: ContactForm,
    /// Active toast notifications, oldest first
    pub(crate) toasts: Vec<Toast>,
    /// Sticky header scroll state
    pub(crate) header: StickyHeader,
    /// Whether the mobile menu overlay is open
    pub(crate) menu_open: bool,
    /// Offline cache warm-up state
    pub(crate) loading_state: LoadingState,
    /// Section id to scroll to on the next frame
    pub(crate) scroll_target: Option<String>,
    /// Last seen scroll offset, for edge-detecting scroll events
    pub(crate) last_scroll_offset: f32,
    /// Channel for the background cache warm-up result
    precache_receiver: Option<Receiver<anyhow::Result<PrecacheReport>>>,
}

impl FarmSiteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = UserSettings::load();
        let mut controller = LanguageController::new(settings);

        let current_page = PageKind::Home;
        let mut document = current_page.document();

        match EmbeddedSource::load() {
            Ok(source) => {
                if let Err(e) = controller.initialize(&source, &mut document, current_page) {
                    warn!("Starting untranslated: {}", e);
                }
            }
            Err(e) => error!("Failed to load locale data: {}", e),
        }

        // Warm the offline copy in the background; the UI never waits on it.
        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(warm_site_cache());
        });

        Self {
            controller,
            current_page,
            document,
            form: ContactForm::default(),
            toasts: Vec::new(),
            header: StickyHeader::default(),
            menu_open: false,
            loading_state: LoadingState::Precaching,
            scroll_target: None,
            last_scroll_offset: 0.0,
            precache_receiver: Some(rx),
        }
    }

    /// Load a page: fresh model, current language re-applied on top.
    pub(crate) fn navigate(&mut self, page: PageKind) {
        self.current_page = page;
        self.document = page.document();
        self.controller.apply(&mut self.document, page);
        self.form.reset();
        self.menu_open = false;
        self.scroll_target = None;
        self.last_scroll_offset = 0.0;
    }

    /// Route a clicked href: in-page anchor, external scheme, or page load.
    pub(crate) fn follow_link(&mut self, href: &str) {
        if let Some(anchor) = href.strip_prefix('#') {
            if !anchor.is_empty() {
                self.scroll_target = Some(anchor.to_string());
            }
            return;
        }
        if href.starts_with("http") || href.starts_with("tel:") || href.starts_with("mailto:") {
            self.open_external(href);
            return;
        }
        self.navigate(PageKind::from_path(href));
    }

    /// Hand an external link to the OS.
    pub(crate) fn open_external(&mut self, href: &str) {
        if let Err(e) = open::that(href) {
            warn!(href, error = %e, "Failed to open external link");
            let message = self
                .controller
                .translate("toast.formError")
                .unwrap_or_else(|| "An error occurred. Please try again.".to_string());
            self.show_toast(message, ToastKind::Error);
        }
    }

    /// Show a toast message
    pub(crate) fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(Toast::new(message, kind));
    }

    /// Flip the language and confirm it in the new language.
    pub(crate) fn toggle_language(&mut self) {
        let message = self.controller.toggle(&mut self.document, self.current_page);
        self.show_toast(message, ToastKind::Success);
    }

    /// Capture the contact form and acknowledge with a localized toast.
    pub(crate) fn submit_contact_form(&mut self) {
        let _submission = self.form.submit();
        let message = self
            .controller
            .translate("toast.formThanks")
            .unwrap_or_else(|| "Thank you for your message! We will contact you soon.".to_string());
        self.show_toast(message, ToastKind::Success);
    }

    fn poll_precache(&mut self) {
        let Some(receiver) = &self.precache_receiver else {
            return;
        };
        match receiver.try_recv() {
            Ok(Ok(report)) => {
                info!(
                    cached = report.cached,
                    failed = report.failed,
                    "Site available offline"
                );
                self.loading_state = LoadingState::Idle;
                self.precache_receiver = None;
            }
            Ok(Err(e)) => {
                warn!("Offline copy unavailable: {:#}", e);
                self.loading_state = LoadingState::Idle;
                self.precache_receiver = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.loading_state = LoadingState::Idle;
                self.precache_receiver = None;
            }
        }
    }

    fn render_loading_overlay(&self, ctx: &egui::Context) {
        if self.loading_state != LoadingState::Precaching {
            return;
        }
        egui::Area::new(egui::Id::new("loading-overlay"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(160))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(24, 16))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new("Preparing offline copy")
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    });
            });
    }
}

impl eframe::App for FarmSiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_precache();
        self.toasts.retain(|t| !t.is_expired());

        // At most one header state change per frame, whatever the scroll
        // events did in between.
        self.header.take_update();

        self.render_header(ctx);
        self.render_page(ctx);
        self.render_menu(ctx);
        self.render_loading_overlay(ctx);
        self.render_toasts(ctx);

        if !self.toasts.is_empty() || self.loading_state == LoadingState::Precaching {
            ctx.request_repaint();
        }
    }
}

/// Install the current site bundle into the offline cache and drop stale
/// versions. Prefers a local `site/` bundle next to the executable and
/// falls back to the published site.
fn warm_site_cache() -> anyhow::Result<PrecacheReport> {
    let cache = OfflineCache::open().context("opening the site cache")?;

    let bundle = std::path::PathBuf::from("site");
    let report = if bundle.is_dir() {
        cache
            .install(&DirSource::new(bundle))
            .context("installing from the local site bundle")?
    } else {
        cache
            .install(&HttpSource::new(SITE_BASE_URL))
            .context("installing from the published site")?
    };

    cache.activate().context("purging old cache versions")?;
    Ok(report)
}
