//! Quality-time report viewer - Desktop GUI Application
//!
//! Shows a Quality-time report as subjects and metric tables, fetched from the
//! server's HTTP API.

use clap::Parser;
use iced::{Size, window};

use qt_gui::app::App;
use qt_gui::cli::Cli;
use qt_gui::logging::init_logging;

/// Application entry point.
pub fn main() -> iced::Result {
    let cli = Cli::parse();

    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    tracing::info!("Starting Quality-time report viewer");

    let startup = cli.startup();

    iced::application(move || App::new(startup.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(800.0, 600.0)),
            ..Default::default()
        })
        .run()
}
