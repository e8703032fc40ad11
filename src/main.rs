use bugsquash::app::App;
use bugsquash::constants::LOOP_TIME;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// The main entry point of the application.
///
/// Sets up tracing, initializes the app, and enters the main game loop.
/// Initialization failure is reported once and the session never starts.
pub fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Could not start game: {}", e);
            std::process::exit(1);
        }
    };

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    loop {
        if !app.run() {
            break;
        }
    }
}
