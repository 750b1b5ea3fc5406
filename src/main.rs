fn main() {
    if let Err(err) = warp_plaza::run() {
        eprintln!("scene error: {err}");
        std::process::exit(1);
    }
}
