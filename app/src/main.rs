use std::process::ExitCode;

use clap::Parser;
use primview_app::{AppError, HeadlessRenderer, ViewerApp, ViewerArgs};

fn run(args: &ViewerArgs) -> Result<(), AppError> {
    let config = args.load_config()?;
    ViewerApp::run(config, args, HeadlessRenderer::new())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    primview_core::init();
    primview_app::init();

    let args = ViewerArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
