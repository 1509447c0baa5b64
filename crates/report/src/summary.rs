//! Plain-text report blocks.
//!
//! Everything here returns a `String` so the caller decides where it goes;
//! the pipeline prints to standard output.

use std::fmt::Write as _;

use minerva_series::Panel;
use minerva_var::CausalityTest;

/// Formats the first `n_rows` rows of a panel as an aligned table, one
/// column per series with the month index first.
pub fn panel_preview(panel: &Panel, n_rows: usize) -> String {
    let shown = n_rows.min(panel.n_rows());
    let mut out = String::new();

    let _ = write!(out, "{:<8}", "month");
    for name in panel.columns() {
        let _ = write!(out, " {name:>14}");
    }
    out.push('\n');

    for row in 0..shown {
        let _ = write!(out, "{:<8}", panel.months()[row].to_string());
        for col in 0..panel.n_cols() {
            let _ = write!(out, " {:>14.4}", panel.value(row, col));
        }
        out.push('\n');
    }
    if shown < panel.n_rows() {
        let _ = writeln!(out, "({} more rows)", panel.n_rows() - shown);
    }
    out
}

/// Formats the variable ordering behind the orthogonalized shocks as one
/// report line. Position matters: earlier variables absorb the
/// contemporaneous correlation.
pub fn cholesky_ordering(names: &[String]) -> String {
    format!("Cholesky ordering: {}", names.join(" -> "))
}

/// Formats a Granger causality test as a bordered summary table with the
/// statistic, critical value, p-value and degrees of freedom.
pub fn causality_table(test: &CausalityTest) -> String {
    let (df_num, df_den) = test.df();
    let hypothesis = format!(
        "H0: {} does not Granger-cause {}",
        test.cause(),
        test.effect()
    );
    let df = format!("({df_num}, {df_den})");

    let mut out = String::new();
    let _ = writeln!(out, "Granger causality F-test. {hypothesis}.");
    let _ = writeln!(out, "{}", "=".repeat(58));
    let _ = writeln!(
        out,
        "{:>14} {:>14} {:>12} {:>14}",
        "Test statistic", "Critical value", "p-value", "df"
    );
    let _ = writeln!(out, "{}", "-".repeat(58));
    let _ = writeln!(
        out,
        "{:>14.3} {:>14.3} {:>12.4} {:>14}",
        test.statistic(),
        test.critical_value(),
        test.p_value(),
        df
    );
    let _ = writeln!(out, "{}", "-".repeat(58));
    out
}

/// One natural-language sentence stating the test decision.
pub fn verdict(test: &CausalityTest) -> String {
    let percent = test.significance() * 100.0;
    if test.rejects() {
        format!(
            "Changes in {} help predict {} (p = {:.4}, rejecting no-causality at the {percent:.0}% level).",
            test.cause(),
            test.effect(),
            test.p_value()
        )
    } else {
        format!(
            "No evidence that changes in {} help predict {} (p = {:.4} at the {percent:.0}% level).",
            test.cause(),
            test.effect(),
            test.p_value()
        )
    }
}
