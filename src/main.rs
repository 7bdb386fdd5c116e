use guildsmith::config::Config;
use guildsmith::data::discord::HttpGuildClient;
use guildsmith::error::AppError;
use guildsmith::model::template;
use guildsmith::service::reconcile::{Reconciler, ADMINISTRATOR_ROLE};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    // The template is validated before any remote call is made.
    let template = template::load(&config.template_path)?;

    let client = HttpGuildClient::connect(&config).await?;

    Reconciler::new(&client).run(&template.server).await?;

    tracing::info!(
        "Initial creation complete. Assign yourself the {} role in server settings.",
        ADMINISTRATOR_ROLE
    );

    Ok(())
}
