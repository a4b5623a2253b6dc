use std::io;

fn main() {
    highcard_cli::logging::init_logging();
    let code = highcard_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
