use log::error;

mod cli;

fn main() {
    // A missing .env file is fine, settings may come from the real environment
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = cli::run() {
        error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
