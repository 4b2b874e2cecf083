use drilllog_pro::data::error_logs::{filter_errors, ErrorStats, Severity, SeverityFilter, ERROR_LOGS};
use drilllog_pro::data::filter_rows;
use drilllog_pro::data::job_logs::JOB_LOGS;
use drilllog_pro::data::reports::{ReportSelection, REPORTS};
use drilllog_pro::data::users::USERS;
use pretty_assertions::assert_eq;

#[test]
fn job_logs_match_customer_well_supervisor_or_id() {
    let ids = |query: &str| -> Vec<&str> { filter_rows(JOB_LOGS, query).iter().map(|j| j.id).collect() };

    assert_eq!(ids("permian"), vec!["JL-2024-001"]);
    assert_eq!(ids("SARAH"), vec!["JL-2024-002"]);
    assert_eq!(ids("jl-2024-00").len(), 4);
    assert_eq!(ids(""), ids("JL"));
    assert!(ids("no such well").is_empty());
}

#[test]
fn users_match_name_email_role_or_department() {
    let names = |query: &str| -> Vec<&str> { filter_rows(USERS, query).iter().map(|u| u.name).collect() };

    assert_eq!(names("field supervisor"), vec!["Sarah Williams", "Lisa Rodriguez"]);
    assert_eq!(names("analytics"), vec!["David Thompson"]);
    assert_eq!(names("@example.com").len(), USERS.len());
}

#[test]
fn error_search_and_severity_both_apply() {
    let ids = |query: &str, severity| -> Vec<&str> {
        filter_errors(ERROR_LOGS, query, severity)
            .iter()
            .map(|e| e.id)
            .collect()
    };

    assert_eq!(ids("excel", SeverityFilter::All), vec!["ERR-001", "ERR-005"]);
    assert_eq!(ids("excel", SeverityFilter::Only(Severity::High)), vec!["ERR-001"]);
    assert_eq!(
        ids("", SeverityFilter::Only(Severity::High)),
        vec!["ERR-001", "ERR-004", "ERR-007"]
    );
    assert_eq!(ids("jl-2024", SeverityFilter::All), vec!["ERR-004", "ERR-007"]);
    assert!(ids("excel", SeverityFilter::Only(Severity::Low)).is_empty());
}

#[test]
fn error_stats_cover_the_whole_table() {
    assert_eq!(
        ErrorStats::from_logs(ERROR_LOGS),
        ErrorStats {
            total: 7,
            high: 3,
            medium: 2,
            low: 2,
            resolved: 3,
            unresolved: 4,
        }
    );
}

#[test]
fn reports_match_name_or_description() {
    let ids: Vec<&str> = filter_rows(REPORTS, "Analysis").iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["customer-analysis", "error-analysis"]);
}

#[test]
fn toggle_all_selects_then_clears() {
    let mut selection = ReportSelection::default();
    selection.set("error-analysis", true);
    assert!(!selection.all_selected(REPORTS));

    selection.toggle_all(REPORTS);
    assert_eq!(selection.len(), REPORTS.len());
    assert!(selection.all_selected(REPORTS));

    selection.toggle_all(REPORTS);
    assert!(selection.is_empty());
}

#[test]
fn download_resolves_selected_reports_in_selection_order() {
    let mut selection = ReportSelection::default();
    selection.toggle("regional-breakdown");
    selection.toggle("job-logs");
    selection.set("job-logs", true);

    let names: Vec<&str> = selection.download(REPORTS).iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["Regional Operations Breakdown", "Complete Job Logs Report"]
    );

    selection.toggle("regional-breakdown");
    assert!(!selection.is_selected("regional-breakdown"));
    assert_eq!(selection.len(), 1);
}
