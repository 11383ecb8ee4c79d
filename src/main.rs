mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report(&*e);
        std::process::exit(1);
    }
}
