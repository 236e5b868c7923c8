use crate::config::Config;
use crate::seeder::Seeder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod seeder;
mod submitter;
mod taxonomy;

#[cfg(test)]
mod tests;

fn main() {
    // Logs go to stderr; stdout is reserved for the per-listing lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        api_url = %config.api_url,
        categories = %config.categories_path.display(),
        listings = %config.listings_path.display(),
        "Starting listing seeder"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match Seeder::new(config).run(&mut out) {
        Ok(report) => {
            tracing::info!(
                planned = report.planned,
                submitted = report.submitted,
                succeeded = report.succeeded,
                dry_run = report.dry_run,
                "Seeding finished"
            );
        }
        Err(e) => {
            eprintln!("❌ Seeding aborted: {e}");
            std::process::exit(1);
        }
    }
}
