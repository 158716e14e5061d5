//! Standalone HTML page with an ECharts stacked bar chart for one loan.
//!
//! Zooming the chart recomputes the principal/interest sums of the visible
//! months in the browser and shows them above the chart.

use anyhow::{Context, Result};
use serde_json::json;
use splaty_core::MonthlySeries;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// ISO 4217 code used in the axis label and sum formatting
    pub currency: String,
    /// BCP 47 locale for `Intl.NumberFormat`
    pub locale: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            currency: "PLN".to_string(),
            locale: "de-DE".to_string(),
        }
    }
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="pl">
<head>
<meta charset="utf-8">
<title>__PAGE_TITLE__</title>
<script src="__ECHARTS__"></script>
<style>
  body { font-family: sans-serif; margin: 1.5rem; }
  #chart { width: 100%; max-width: 1200px; height: 600px; }
  h1 { font-size: 1.25rem; margin: 0.25rem 0; }
</style>
</head>
<body>
<div id="chart"></div>
<h1 id="kapital_sum">Kapitał: N/A</h1>
<h1 id="odsetki_sum">Odsetki: N/A</h1>
<script>
  const report = __REPORT__;
  const formatter = new Intl.NumberFormat(report.locale, { style: "currency", currency: report.currency });
  const chart = echarts.init(document.getElementById("chart"));

  chart.setOption({
    title: { text: report.title },
    tooltip: { trigger: "axis" },
    legend: { show: true, top: "15%" },
    xAxis: { type: "category", name: "Miesiąc", data: report.months },
    yAxis: { type: "value", name: "Kwota (" + report.currency + ")" },
    dataZoom: [
      { type: "inside", xAxisIndex: [0] },
      { type: "slider", xAxisIndex: [0] }
    ],
    series: [
      { name: "Kapitał", type: "bar", stack: "stack", data: report.principal },
      { name: "Odsetki", type: "bar", stack: "stack", data: report.interest }
    ]
  });

  function showVisibleSums() {
    const zoom = chart.getOption().dataZoom[0];
    const last = report.months.length - 1;
    const start = Math.max(0, zoom.startValue ?? 0);
    const end = Math.min(last, zoom.endValue ?? last);
    let principal = 0;
    let interest = 0;
    for (let i = start; i <= end; i++) {
      principal += report.principal[i];
      interest += report.interest[i];
    }
    document.getElementById("kapital_sum").textContent = "Suma kapitału: " + formatter.format(principal);
    document.getElementById("odsetki_sum").textContent = "Suma odsetek: " + formatter.format(interest);
  }

  chart.on("datazoom", showVisibleSums);
  window.addEventListener("resize", () => chart.resize());
</script>
</body>
</html>
"#;

pub fn chart_title(loan_id: &str) -> String {
    format!("Spłaty — ID {loan_id}")
}

/// Render the chart page for one loan.
pub fn render_html(series: &MonthlySeries, opts: &HtmlOptions) -> Result<String> {
    let months: Vec<String> = series.months.iter().map(|m| m.to_string()).collect();
    let report = json!({
        "title": chart_title(&series.loan_id),
        "currency": opts.currency,
        "locale": opts.locale,
        "months": months,
        "principal": series.principal,
        "interest": series.interest,
    });
    let report_js = serde_json::to_string(&report)
        .context("serialize chart data")?
        .replace("</", "<\\/");

    Ok(TEMPLATE
        .replace("__PAGE_TITLE__", &escape_html(&chart_title(&series.loan_id)))
        .replace("__ECHARTS__", ECHARTS_CDN)
        .replace("__REPORT__", &report_js))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use splaty_core::MonthKey;

    fn series(id: &str) -> MonthlySeries {
        MonthlySeries {
            loan_id: id.to_string(),
            months: vec![
                MonthKey::new(2024, 1).unwrap(),
                MonthKey::new(2024, 2).unwrap(),
            ],
            principal: vec![100.5, 0.0],
            interest: vec![20.0, 0.0],
        }
    }

    #[test]
    fn test_page_contains_chart_data() {
        let html = render_html(&series("42"), &HtmlOptions::default()).unwrap();
        assert!(html.contains("<title>Spłaty — ID 42</title>"));
        assert!(html.contains(r#""months":["2024-01","2024-02"]"#));
        assert!(html.contains(r#""principal":[100.5,0.0]"#));
        assert!(html.contains(r#""currency":"PLN""#));
        assert!(html.contains("Kapitał: N/A"));
        assert!(html.contains(ECHARTS_CDN));
        assert!(!html.contains("__REPORT__"));
    }

    #[test]
    fn test_options_flow_into_page() {
        let opts = HtmlOptions {
            currency: "EUR".to_string(),
            locale: "pl-PL".to_string(),
        };
        let html = render_html(&series("1"), &opts).unwrap();
        assert!(html.contains(r#""currency":"EUR""#));
        assert!(html.contains(r#""locale":"pl-PL""#));
    }

    #[test]
    fn test_hostile_id_is_escaped() {
        let html = render_html(&series("</script><b>&"), &HtmlOptions::default()).unwrap();
        assert!(html.contains("<title>Spłaty — ID &lt;/script&gt;&lt;b&gt;&amp;</title>"));
        assert_eq!(html.matches("</script>").count(), 2);
    }
}
