use specimen_core::credentials::API_KEY;

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    // Debug-leak sample: the resolved key lands in the log stream verbatim.
    tracing::debug!("api key is {}", *API_KEY);
    println!("Test file with multiple vulnerabilities");
}
