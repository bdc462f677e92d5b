//! `CarouselApp` — the egui viewer.
//!
//! This module declares the app state and the frame loop. Methods live in
//! the sibling sub-modules:
//!
//! - `navigation` — background page loading and binding
//! - `toolbar`    — source bar and timer status
//! - `content`    — carousel drawing, arrows, hover tracking

pub mod content;
pub mod navigation;
pub mod toolbar;

use std::sync::mpsc;
use std::time::Instant;

use eframe::egui;

use dom_carousel::dom::DomTree;
use dom_carousel::net::PageSource;
use dom_carousel::{Carousel, CarouselConfig, CarouselError};

/// Five-item page used when no source is given on the command line.
pub const DEMO_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Carousel demo</title></head>
  <body>
    <div class="arrow-left">&#9664;</div>
    <div id="carousel" data-active="0">
      <div class="item" data-index="0">Aurora</div>
      <div class="item" data-index="1">Basalt</div>
      <div class="item" data-index="2">Cirrus</div>
      <div class="item" data-index="3">Delta</div>
      <div class="item" data-index="4">Estuary</div>
    </div>
    <div class="arrow-right">&#9654;</div>
  </body>
</html>
"#;

pub fn demo_source() -> PageSource {
    PageSource::Inline("demo".into(), DEMO_PAGE.into())
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct CarouselApp {
    pub source_input: String,
    pub source: PageSource,
    pub config: CarouselConfig,
    pub carousel: Option<Carousel>,
    pub error: Option<String>,
    pub loading: bool,
    pub load_rx: Option<mpsc::Receiver<Result<DomTree, CarouselError>>>,
    /// Pointer was over the carousel region last frame
    pub pointer_inside: bool,
    pub dark_mode: bool,
}

impl CarouselApp {
    pub fn new(source: PageSource) -> Self {
        let source_input = match &source {
            PageSource::Inline(..) => String::new(),
            other => other.label().to_string(),
        };
        Self {
            source_input,
            source,
            config: CarouselConfig::default(),
            carousel: None,
            error: None,
            loading: false,
            load_rx: None,
            pointer_inside: false,
            dark_mode: true,
        }
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load();

        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let now = Instant::now();
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.tick(now);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });

        // Wake for the next timer deadline even without input
        if let Some(deadline) = self
            .carousel
            .as_ref()
            .and_then(|c| c.timer().next_deadline())
        {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
