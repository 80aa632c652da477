fn main() {
    if let Err(err) = car_status_api::app::run_api() {
        eprintln!("api startup failed: {err}");
        std::process::exit(1);
    }
}
