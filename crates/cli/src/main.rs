fn main() {
    if let Err(error) = tree_filter_cli::run() {
        // Tracing is initialized inside run() after argument parsing.
        tracing::error!(%error, "tree-filter failed");
        std::process::exit(1);
    }
}
