fn main() {
    if let Err(err) = budget_bridge::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
