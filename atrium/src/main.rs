use anyhow::Result;

use atrium::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is initialized in App::run() so the log file lives with the app
    App::new().run().await?;

    Ok(())
}
