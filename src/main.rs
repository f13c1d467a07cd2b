fn main() {
    if let Err(err) = pitchpulse_lib::run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
