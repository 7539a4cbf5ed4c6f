use clap::Parser;
use fire_cover::app::FireCoverApp;

fn main() {
    env_logger::init();
    log::debug!("starting fire-cover at {}", chrono::Local::now().to_rfc3339());
    let args = FireCoverApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running fire-cover: {e}");
            std::process::exit(1);
        }
    }
}
