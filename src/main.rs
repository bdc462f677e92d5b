mod app;

use eframe::egui;

use app::CarouselApp;
use dom_carousel::net::PageSource;

fn main() {
    env_logger::init();

    let source = std::env::args()
        .nth(1)
        .map(|arg| PageSource::from_arg(&arg))
        .unwrap_or_else(app::demo_source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "DOM Carousel",
        options,
        Box::new(move |cc| {
            let mut app = CarouselApp::new(source);
            app.load(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    ) {
        log::error!("viewer exited with error: {}", e);
        std::process::exit(1);
    }
}
