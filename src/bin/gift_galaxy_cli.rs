use std::process;

fn main() {
    gift_galaxy::init();

    if let Err(err) = gift_galaxy::cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
