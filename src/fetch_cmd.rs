//! Fetch command: acquisition and panel preview without estimation.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use minerva_fetch::{HttpProvider, SeriesProvider};
use minerva_report::panel_preview;
use minerva_series::{Panel, consolidate};

use crate::cli::FetchArgs;
use crate::config::CountryToml;
use crate::convert;

/// Rows of the consolidated panel echoed to standard output.
const PREVIEW_ROWS: usize = 5;

/// Run the acquisition-only pipeline: fetch, consolidate, preview.
pub fn run(args: FetchArgs) -> Result<()> {
    let _cmd = info_span!("fetch").entered();
    let config = crate::config::load(&args.config)?;
    let provider = HttpProvider::new(&convert::build_client_config(&config.fetch));

    for country in config.select_countries(args.country.as_deref())? {
        println!("==== {} ====", country.name);
        let panel = fetch_panel(&provider, country)?;
        print_panel(&panel);
    }
    Ok(())
}

/// Acquire every configured series for one country and consolidate them on
/// the common months.
///
/// Fail-fast: the first provider error aborts the country run.
pub fn fetch_panel(provider: &dyn SeriesProvider, country: &CountryToml) -> Result<Panel> {
    let requests = convert::build_requests(country)?;
    let mut series = Vec::with_capacity(requests.len());
    for request in &requests {
        info!(series = %request.name(), source = %request.source(), "fetching series");
        let fetched = provider.fetch(request).with_context(|| {
            format!(
                "failed to fetch series '{}' for {}",
                request.name(),
                country.name
            )
        })?;
        info!(series = %request.name(), n_obs = fetched.len(), "series fetched");
        series.push(fetched);
    }
    consolidate(&series)
        .with_context(|| format!("failed to consolidate panel for {}", country.name))
}

/// Print the consolidated panel block: first rows plus the row count.
pub fn print_panel(panel: &Panel) {
    print!("{}", panel_preview(panel, PREVIEW_ROWS));
    println!("consolidated rows: {}", panel.n_rows());
}
