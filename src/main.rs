use lissajous::app;
use lissajous::curve::CurveError;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), CurveError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    app::run_app()
}
