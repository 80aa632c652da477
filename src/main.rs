fn main() {
    if let Err(err) = car_status_api::app::run() {
        eprintln!("application startup failed: {err}");
        std::process::exit(1);
    }
}
