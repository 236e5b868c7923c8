// src/seeder.rs

use crate::config::Config;
use crate::domain::{missing_pairs, CoverageSet, PlaceholderListing};
use crate::errors::{SeederError, SeederResult};
use crate::submitter::ListingSubmitter;
use crate::taxonomy::{load_categories, load_listings};
use std::io::Write;

/// Counts from one run, logged by `main` once the loop is done.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub categories: usize,
    pub subcategories: usize,
    /// Taxonomy pairs with no listing, i.e. lines printed.
    pub planned: usize,
    pub submitted: usize,
    /// 2xx answers among `submitted`.
    pub succeeded: usize,
    pub dry_run: bool,
}

pub struct Seeder {
    config: Config,
}

impl Seeder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load both documents, then post a placeholder for every uncovered
    /// subcategory, writing `<name>: <status>` to `out` after each request.
    ///
    /// Stops at the first error. Lines already written stay written.
    pub fn run<W: Write>(&self, out: &mut W) -> SeederResult<RunReport> {
        let categories = load_categories(&self.config.categories_path)?;
        let listings = load_listings(&self.config.listings_path)?;

        let coverage = CoverageSet::from_listings(&listings);
        let missing = missing_pairs(&categories, &coverage);

        let mut report = RunReport {
            categories: categories.len(),
            subcategories: categories.iter().map(|c| c.sub_categories.len()).sum(),
            planned: missing.len(),
            dry_run: self.config.dry_run,
            ..RunReport::default()
        };

        tracing::info!(
            categories = report.categories,
            subcategories = report.subcategories,
            covered_pairs = coverage.len(),
            missing = report.planned,
            dry_run = report.dry_run,
            "Computed missing sample listings"
        );

        if self.config.dry_run {
            for pair in &missing {
                writeln!(out, "{}: dry-run", pair.display_name()?).map_err(output_err)?;
            }
            return Ok(report);
        }

        let submitter =
            ListingSubmitter::new(self.config.api_url.as_str(), self.config.request_timeout)?;

        for pair in &missing {
            let listing = PlaceholderListing::for_pair(pair)?;

            tracing::debug!(
                category = %listing.category,
                subcategory = %listing.subcategory,
                url = submitter.url(),
                "Posting placeholder listing"
            );

            let status = submitter.submit(&listing)?;
            report.submitted += 1;
            if status.is_success() {
                report.succeeded += 1;
            }

            writeln!(out, "{}: {}", pair.display_name()?, status.as_u16())
                .map_err(output_err)?;
        }

        Ok(report)
    }
}

fn output_err(e: std::io::Error) -> SeederError {
    SeederError::Output(e.to_string())
}
