//! Plain-text rendering of a prioritization report.

use iuu_risk_engine::report::PrioritizationReport;
use iuu_risk_engine::tracks::VesselReport;

/// Prints the ranked table, narratives, and operational summary.
pub fn print_report(report: &PrioritizationReport) {
    println!(
        "Patrol position: {:.4}, {:.4}   Distance filter: {} nm",
        report.patrol.latitude, report.patrol.longitude, report.range_nm
    );
    println!();

    if let Some(notice) = &report.notice {
        println!("{notice}");
    } else {
        println!(
            "Top {} of {} risk-ranked vessel(s) in range",
            report.table.len(),
            report.vessels_in_filter
        );
        println!(
            "{:>4}  {:<24} {:<11} {:<10} {:<18} {:>5} {:<8} {:>9} {:>6} {:>6} {:>7} {:>6}",
            "#", "VESSEL", "MMSI", "IMO", "FLAG", "SCORE", "LEVEL", "DIST_NM", "DAYS", "KNOTS",
            "LOITER", "AIS"
        );
        println!("{}", "-".repeat(128));
        for row in &report.table {
            println!(
                "{:>4}  {:<24} {:<11} {:<10} {:<18} {:>5} {:<8} {:>9.2} {:>6} {:>6} {:>7} {:>6}",
                row.rank,
                row.name,
                row.mmsi,
                row.imo,
                row.flag_state,
                row.score,
                row.level.as_ref(),
                row.distance_nm,
                row.days_since_port,
                row.speed_knots,
                row.loitering_hours,
                row.ais_gap_hours
            );
        }
    }

    if !report.narratives.is_empty() {
        println!();
        println!("Boarding Recommendation Report");
        println!("{}", "=".repeat(30));
        for narrative in &report.narratives {
            println!("{narrative}");
            println!("---");
        }
    }

    println!();
    println!("Operational Summary");
    println!("{}", "=".repeat(19));
    println!("{}", report.summary.text);

    if !report.warnings.is_empty() {
        println!();
        println!(
            "{} non-numeric value(s) were treated as 0 (see warnings above)",
            report.warnings.len()
        );
    }
}

/// Prints per-vessel track reports.
pub fn print_vessel_reports(reports: &[VesselReport]) {
    println!("Vessel Report");
    println!("{}", "=".repeat(13));
    for report in reports {
        println!("{report}");
        println!("---");
    }
}
