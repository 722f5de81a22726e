use std::process::exit;

use rolodex_web::prelude::run_app;

#[tokio::main]
async fn main() {
    if let Err(err) = run_app().await {
        eprintln!("Error: {err}");
        exit(1);
    }
}
