fn main() {
    // Delegate to CLI runner; it returns the exit status for completed runs.
    match token_lint::cli::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
