use clap::Parser;
use routewatch::app::RouteCliArguments;

fn main() {
    env_logger::init();
    let args = RouteCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running routewatch: {e}");
            std::process::exit(1);
        }
    }
}
