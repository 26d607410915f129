//! `storefront stats`: summarise dashboard statistics.

use serde::Serialize;
use tracing::instrument;

use storefront_core::{
    domain::{ChannelCode, DashboardStatistics},
    error::StorefrontError,
};

use crate::{cli::StatsArgs, error::CliResult, output::OutputManager};

/// Snapshot plus its derived figure, for JSON output.
#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    statistics: &'a DashboardStatistics,
    average_order_value: i64,
}

#[instrument(skip_all)]
pub fn execute(args: StatsArgs, output: OutputManager) -> CliResult<()> {
    let statistics = build(&args)?;

    if output.is_json() {
        output.json(&StatsReport {
            statistics: &statistics,
            average_order_value: statistics.average_order_value(),
        })?;
        return Ok(());
    }

    let title = match statistics.channel() {
        Some(channel) => format!("Dashboard statistics ({channel})"),
        None => "Dashboard statistics".to_string(),
    };
    output.header(&title)?;
    for line in render_lines(&statistics) {
        output.print(&line)?;
    }

    Ok(())
}

fn build(args: &StatsArgs) -> Result<DashboardStatistics, StorefrontError> {
    let channel = args.channel.as_deref().map(ChannelCode::new).transpose()?;

    Ok(DashboardStatistics::try_from_signed(
        args.total_sales,
        args.orders,
        args.customers,
        channel,
    )?)
}

fn render_lines(statistics: &DashboardStatistics) -> Vec<String> {
    vec![
        format!("  Total sales:          {}", statistics.total_sales()),
        format!("  New orders:           {}", statistics.number_of_new_orders()),
        format!("  New customers:        {}", statistics.number_of_new_customers()),
        format!("  Average order value:  {}", statistics.average_order_value()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::domain::DomainError;

    fn args(total_sales: i64, orders: i64, channel: Option<&str>) -> StatsArgs {
        StatsArgs {
            total_sales,
            orders,
            customers: 1,
            channel: channel.map(String::from),
        }
    }

    #[test]
    fn renders_average() {
        let statistics = build(&args(100, 3, None)).unwrap();
        let lines = render_lines(&statistics);
        assert_eq!(lines[3], "  Average order value:  33");
    }

    #[test]
    fn rejects_negative_orders() {
        let err = build(&args(100, -3, None)).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Domain(DomainError::NegativeCount { .. })
        ));
    }

    #[test]
    fn rejects_blank_channel() {
        assert!(build(&args(100, 3, Some(""))).is_err());
        assert_eq!(
            build(&args(100, 3, Some("WEB"))).unwrap().channel().map(|c| c.as_str()),
            Some("WEB")
        );
    }

    #[test]
    fn json_report_flattens_snapshot() {
        let statistics = build(&args(100, 3, Some("WEB"))).unwrap();
        let report = StatsReport {
            statistics: &statistics,
            average_order_value: statistics.average_order_value(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_sales"], 100);
        assert_eq!(json["number_of_new_orders"], 3);
        assert_eq!(json["channel"], "WEB");
        assert_eq!(json["average_order_value"], 33);
    }
}
