use rusty_library_lending::{
    scenario,
    seed::{LibrarySeed, SeedError},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), SeedError> {
    // Initialize tracing (stderr, so the report on stdout stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_lending=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let repositories = LibrarySeed::builtin()?.into_repositories();

    print!("{}", scenario::run(&repositories));

    Ok(())
}
