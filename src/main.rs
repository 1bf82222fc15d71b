mod cli;

fn main() {
    if let Err(failure) = cli::run() {
        failure.report();
        std::process::exit(1);
    }
}
