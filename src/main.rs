use fileprobe::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = cli::run().await {
        // The missing-argument path has already printed its indicator.
        if !cli::is_missing_argument(&e) {
            eprintln!("❌ Error: {e:#}");
        }
        std::process::exit(cli::exit_code(&e));
    }
}
