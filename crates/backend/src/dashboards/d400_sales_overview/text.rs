//! Plain-text rendering of the dashboard for the `report` command.

use contracts::dashboards::d400_sales_overview::{SalesOverview, SalesOverviewResponse};

use crate::shared::format::{format_currency, format_number, format_percent};

/// Placeholder for an undefined attainment
pub const NO_VALUE: &str = "—";

const RULE: &str = "----------------------------------------------------------------";

pub fn render_text(response: &SalesOverviewResponse) -> String {
    match response {
        SalesOverviewResponse::Empty { notice, .. } => format!("{}\n", notice),
        SalesOverviewResponse::Ready(view) => overview_lines(view).join("\n") + "\n",
    }
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push(RULE.to_string());
}

fn overview_lines(view: &SalesOverview) -> Vec<String> {
    let mut lines = vec!["SALES OVERVIEW".to_string(), RULE.to_string()];
    for chip in &view.chips {
        lines.push(format!("{:<12} {}", format!("{}:", chip.label), chip.value));
    }

    let k = &view.kpis;
    section(&mut lines, "KPIs");
    lines.push(format!("{:<22} {}", "Revenue", format_currency(k.total_revenue)));
    lines.push(format!("{:<22} {}", "Orders", format_number(k.order_count)));
    lines.push(format!("{:<22} {}", "Avg order value", format_currency(k.avg_order_value)));
    lines.push(format!("{:<22} {}", "Margin", format_percent(k.margin_pct)));
    lines.push(format!("{:<22} {}", "Target", format_currency(k.target_revenue)));
    lines.push(format!(
        "{:<22} {}",
        "Target orders",
        format_number(k.target_order_count as usize)
    ));
    lines.push(format!(
        "{:<22} {} [{}]",
        "Progress",
        format_percent(k.progress_pct),
        progress_bar(k.progress_bar_pct)
    ));
    lines.push(format!("{:<22} {}", "Gap to target", format_currency(k.gap)));

    section(&mut lines, "Monthly target vs actual");
    for p in &view.monthly {
        lines.push(format!(
            "{:<8} {:>16} {:>16}",
            p.year_month,
            format_currency(p.target),
            format_currency(p.actual)
        ));
    }

    section(&mut lines, "Channels");
    for c in &view.channels {
        lines.push(format!(
            "{:<16} {:>16} {:>8} orders {:>16} {:>7}",
            c.channel,
            format_currency(c.revenue),
            format_number(c.order_count),
            format_currency(c.profit),
            format_percent(c.margin_pct)
        ));
    }

    section(&mut lines, "Category / brand mix");
    for c in &view.categories {
        lines.push(format!("{:<20} {:>16}", c.category, format_currency(c.revenue)));
        for b in &c.brands {
            lines.push(format!("  {:<18} {:>16}", b.brand, format_currency(b.revenue)));
        }
    }

    section(&mut lines, "States");
    for s in &view.states {
        lines.push(format!(
            "{:<4} {:>16} {:>16} {:>7}",
            s.state,
            format_currency(s.revenue),
            format_currency(s.profit),
            format_percent(s.margin_pct)
        ));
    }

    section(&mut lines, "Top products");
    for p in &view.top_products {
        let attainment = p
            .attainment_pct
            .map(format_percent)
            .unwrap_or_else(|| NO_VALUE.to_string());
        lines.push(format!(
            "{:<24} {:<10} {:>14} {:>14} {:>7} {:>6} {:>12}",
            p.product,
            p.brand,
            format_currency(p.target),
            format_currency(p.revenue),
            attainment,
            format_number(p.order_count),
            format_currency(p.avg_ticket)
        ));
    }

    lines
}

/// 30-char bar; 100% fills 30 chars, anything above overflows up to the cap
fn progress_bar(pct: f64) -> String {
    let filled = ((pct.max(0.0) / 100.0) * 30.0).round() as usize;
    "#".repeat(filled)
}
