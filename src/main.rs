use mimalloc::MiMalloc;
use professor_seed::{Config, Intake, MongoStore, SeedError, Submission, TerminalPrompt};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    match run().await {
        Ok(submission) => println!("{}", submission.confirmation()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<Submission, SeedError> {
    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        mongodb_uri = %cfg.redacted_uri(),
        database = %cfg.database,
        collection = %cfg.collection,
        loglevel = %cfg.loglevel
    );

    let store = MongoStore::connect(&cfg).await?;

    let mut intake = Intake::new(store);
    let mut prompt = TerminalPrompt::stdio();
    let result = intake.run(&mut prompt).await;

    // Release the client before reporting, on success and failure alike.
    intake.into_store().close().await;
    result
}
