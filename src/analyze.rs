//! Analyze command: the full per-country pipeline from acquisition to the
//! causality verdict.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use minerva_fetch::{HttpProvider, SeriesProvider};
use minerva_report::{PlotStyle, causality_table, cholesky_ordering, render_irf_chart, verdict};
use minerva_series::Panel;
use minerva_var::{VarData, fit_with_aic, granger_causality, orthogonalized};

use crate::cli::AnalyzeArgs;
use crate::config::{CountryToml, ModelToml};
use crate::convert;
use crate::fetch_cmd;

/// Run the full analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    let config = crate::config::load(&args.config)?;

    let output_dir = args.output.unwrap_or_else(|| config.output.dir.clone());
    let style = convert::build_plot_style(&config.output);
    let provider = HttpProvider::new(&convert::build_client_config(&config.fetch));
    let countries = config.select_countries(args.country.as_deref())?;

    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    for country in countries {
        run_country(&provider, country, &config.model, &output_dir, &style)?;
    }
    Ok(())
}

/// Run acquisition, estimation, impulse-response analysis and the causality
/// test for one country.
///
/// The stages form a strict sequence; the first failure aborts the country
/// run, so a chart only exists when everything before it succeeded.
fn run_country(
    provider: &dyn SeriesProvider,
    country: &CountryToml,
    model: &ModelToml,
    output_dir: &Path,
    style: &PlotStyle,
) -> Result<()> {
    let _span = info_span!("country", name = %country.name).entered();
    println!("==== {} ====", country.name);
    let names: Vec<String> = country.series.iter().map(|s| s.name.clone()).collect();
    println!("{}", cholesky_ordering(&names));

    // 1. Acquire and consolidate.
    let panel = fetch_cmd::fetch_panel(provider, country)?;
    fetch_cmd::print_panel(&panel);

    // 2. Stationarity transforms.
    let transforms = convert::build_transforms(country)?;
    let stationary = panel
        .to_stationary(&transforms)
        .with_context(|| format!("failed to transform panel for {}", country.name))?;
    println!("stationary rows: {}", stationary.n_rows());

    // 3. Estimate with AIC lag selection.
    let data = bridge_panel(&stationary)?;
    let (fit, selection) = fit_with_aic(&data, model.max_lags)
        .with_context(|| format!("VAR estimation failed for {}", country.name))?;
    info!(
        order = selection.selected(),
        nobs = fit.nobs(),
        "VAR estimated"
    );
    println!("selected lag order (AIC): {}", selection.selected());

    // 4. Orthogonalized impulse responses and the chart.
    let irf = orthogonalized(&fit, country.horizon, model.significance)
        .with_context(|| format!("impulse-response analysis failed for {}", country.name))?;
    let chart_path = output_dir.join(format!("{}_irf.svg", country.name));
    let title = format!(
        "{}: response of {} to a {} shock",
        country.name, country.response, country.impulse
    );
    render_irf_chart(
        &irf,
        &country.impulse,
        &country.response,
        &title,
        &chart_path,
        style,
    )
    .with_context(|| format!("failed to render chart: {}", chart_path.display()))?;
    println!("chart written: {}", chart_path.display());

    // 5. Granger causality.
    let test = granger_causality(&fit, &country.impulse, &country.response, model.significance)
        .with_context(|| format!("causality test failed for {}", country.name))?;
    println!();
    print!("{}", causality_table(&test));
    println!("{}", verdict(&test));
    println!();
    Ok(())
}

/// Bridge a stationary panel into the estimator's observation matrix,
/// preserving column order.
fn bridge_panel(panel: &Panel) -> Result<VarData> {
    let names = panel.columns().to_vec();
    let columns: Vec<Vec<f64>> = (0..panel.n_cols())
        .map(|i| panel.column_at(i).to_vec())
        .collect();
    VarData::new(names, &columns).context("failed to build estimation data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_distr::{Distribution, StandardNormal};

    use minerva_fetch::{FetchError, SeriesRequest};
    use minerva_series::MonthlySeries;

    use crate::config::SeriesToml;

    /// In-memory provider: serves pre-built observations by series name and
    /// reports an empty response for anything else.
    struct CannedProvider {
        observations: BTreeMap<String, Vec<(NaiveDate, f64)>>,
    }

    impl CannedProvider {
        fn empty() -> Self {
            Self {
                observations: BTreeMap::new(),
            }
        }

        /// Independent random-walk levels, so first differences are
        /// stationary white noise.
        fn with_random_walks(names: &[&str], n_months: usize) -> Self {
            let mut rng = StdRng::seed_from_u64(77);
            let mut observations = BTreeMap::new();
            for &name in names {
                let mut level = 10.0;
                let mut dated = Vec::with_capacity(n_months);
                for m in 0..n_months {
                    let step: f64 = StandardNormal.sample(&mut rng);
                    level += 0.5 * step;
                    let date =
                        NaiveDate::from_ymd_opt(2000 + (m / 12) as i32, (m % 12) as u32 + 1, 1)
                            .expect("valid month arithmetic");
                    dated.push((date, level));
                }
                observations.insert(name.to_string(), dated);
            }
            Self { observations }
        }
    }

    impl SeriesProvider for CannedProvider {
        fn fetch(&self, request: &SeriesRequest) -> Result<MonthlySeries, FetchError> {
            match self.observations.get(request.name()) {
                Some(obs) => Ok(MonthlySeries::from_observations(
                    request.name(),
                    obs.iter().copied(),
                )),
                None => Err(FetchError::EmptyResponse {
                    series: request.name().to_string(),
                }),
            }
        }
    }

    fn test_country() -> CountryToml {
        CountryToml {
            name: "testland".to_string(),
            start: "2000-01-01".to_string(),
            horizon: 6,
            impulse: "policy_rate".to_string(),
            response: "unemployment".to_string(),
            series: vec![
                SeriesToml {
                    name: "policy_rate".to_string(),
                    source: "fred".to_string(),
                    code: "TESTRATE".to_string(),
                    transform: "diff".to_string(),
                },
                SeriesToml {
                    name: "unemployment".to_string(),
                    source: "fred".to_string(),
                    code: "TESTUNEMP".to_string(),
                    transform: "diff".to_string(),
                },
            ],
        }
    }

    fn test_model() -> ModelToml {
        ModelToml {
            max_lags: 4,
            significance: 0.05,
        }
    }

    #[test]
    fn failed_acquisition_writes_no_chart() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let provider = CannedProvider::empty();

        let result = run_country(
            &provider,
            &test_country(),
            &test_model(),
            dir.path(),
            &PlotStyle::default(),
        );

        assert!(result.is_err(), "missing series must abort the run");
        let n_files = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(n_files, 0, "no chart may exist after a fetch failure");
    }

    #[test]
    fn canned_pipeline_writes_the_country_chart() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let provider = CannedProvider::with_random_walks(&["policy_rate", "unemployment"], 240);

        run_country(
            &provider,
            &test_country(),
            &test_model(),
            dir.path(),
            &PlotStyle::default(),
        )
        .unwrap();

        let chart = dir.path().join("testland_irf.svg");
        assert!(chart.exists(), "expected {}", chart.display());
        let svg = std::fs::read_to_string(chart).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn bridged_panel_keeps_column_order() {
        let provider = CannedProvider::with_random_walks(&["policy_rate", "unemployment"], 24);
        let panel = fetch_cmd::fetch_panel(&provider, &test_country()).unwrap();

        let data = bridge_panel(&panel).unwrap();
        assert_eq!(data.names(), ["policy_rate", "unemployment"]);
        assert_eq!(data.n_obs(), 24);
    }
}
