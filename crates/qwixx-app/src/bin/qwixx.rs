//! Qwixx scorekeeper desktop application using egui/eframe.

use qwixx_app::QwixxApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.qwixx-scorekeeper";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Qwixx scorekeeper, version={}",
        qwixx_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((760.0, 560.0))
            .with_min_inner_size((640.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Qwixx",
        options,
        Box::new(|cc| Ok(Box::new(QwixxApp::new(cc)))),
    )
}
