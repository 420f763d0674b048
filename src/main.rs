use clap::Parser;
use padel_elo_processor::{args::Args, model::ladder::Ladder, snapshot::{ClubSnapshot, SnapshotError}};
use tracing::info;

fn main() -> Result<(), SnapshotError> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_level);

    let snapshot = ClubSnapshot::load(&args.matches, args.profiles.as_deref())?;
    info!(
        matches = snapshot.matches.len(),
        profiles = snapshot.profiles.len(),
        "loaded club snapshot"
    );

    let mut ladder = Ladder::new(&snapshot.profiles);
    ladder.process(&snapshot.matches);

    let standings = ladder.standings();
    let json = serde_json::to_string_pretty(&standings).map_err(SnapshotError::Output)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(path = %path.display(), players = standings.len(), "wrote standings");
        }
        None => println!("{json}")
    }

    Ok(())
}

fn init_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into())
        )
        .with_target(false)
        .init();
}
