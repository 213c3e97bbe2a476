// One-time logging configuration, performed before any store operation runs.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log lines go to stderr so they do not interleave with the menu
        // on stdout.
        .with_writer(std::io::stderr)
        .init();
}
