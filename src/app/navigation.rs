//! Page loading for `CarouselApp`.
//!
//! Pages load on a worker thread; `check_load` picks up the parsed tree on
//! the frame loop and mounts the carousel.

use std::sync::mpsc;
use std::time::Instant;

use eframe::egui;

use dom_carousel::net::{load_page, PageSource};
use dom_carousel::Carousel;

use super::CarouselApp;

impl CarouselApp {
    /// Load whatever is in the source bar; an empty bar reloads the demo.
    pub fn load_input(&mut self, ctx: &egui::Context) {
        self.source = if self.source_input.trim().is_empty() {
            super::demo_source()
        } else {
            PageSource::from_arg(&self.source_input)
        };
        self.load(ctx);
    }

    /// Start a background load of `self.source`.
    pub fn load(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.error = None;

        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);

        let source = self.source.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = load_page(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the load channel; mount the carousel when a page arrives.
    pub fn check_load(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };

        match result.and_then(|tree| Carousel::mount(tree, self.config.clone(), Instant::now())) {
            Ok(carousel) => {
                log::info!("loaded {}", self.source.label());
                self.carousel = Some(carousel);
                self.pointer_inside = false;
                self.error = None;
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", self.source.label(), e);
                self.error = Some(e.to_string());
                self.carousel = None;
            }
        }
        self.loading = false;
        self.load_rx = None;
    }
}
