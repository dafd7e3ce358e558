fn main() {
    if let Err(err) = cloak_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
