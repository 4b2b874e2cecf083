use drilllog_pro::{logging, AppConfig, AppError, DrillLogApp};

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    logging::init(&config.logging)?;

    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height]),
        ..Default::default()
    };

    eframe::run_native(
        "DrillLog Pro",
        options,
        Box::new(move |cc: &eframe::CreationContext| Box::new(DrillLogApp::new(cc, config))),
    )
    .map_err(|e| AppError::Window(e.to_string()))
}

fn main() {
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("drilllog-pro: {}", e);
        std::process::exit(1);
    }
}
