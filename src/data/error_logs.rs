use super::{Searchable, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Severity::High => Tone::Destructive,
            Severity::Medium => Tone::Secondary,
            Severity::Low => Tone::Outline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub const CHOICES: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::High),
        SeverityFilter::Only(Severity::Medium),
        SeverityFilter::Only(Severity::Low),
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeverityFilter::All => "All Severities",
            SeverityFilter::Only(Severity::High) => "High Only",
            SeverityFilter::Only(Severity::Medium) => "Medium Only",
            SeverityFilter::Only(Severity::Low) => "Low Only",
        }
    }

    pub fn admits(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(wanted) => wanted == severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    pub id: &'static str,
    pub timestamp: &'static str,
    pub severity: Severity,
    pub source: &'static str,
    pub message: &'static str,
    pub file: &'static str,
    pub resolved: bool,
}

impl ErrorLog {
    pub fn resolution(&self) -> (&'static str, Tone) {
        if self.resolved {
            ("Resolved", Tone::Default)
        } else {
            ("Open", Tone::Destructive)
        }
    }
}

impl Searchable for ErrorLog {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.message, self.source, self.file, self.id]
    }
}

/// Search and severity must both match.
pub fn filter_errors<'a>(
    rows: &'a [ErrorLog],
    query: &str,
    severity: SeverityFilter,
) -> Vec<&'a ErrorLog> {
    super::filter_rows(rows, query)
        .into_iter()
        .filter(|row| severity.admits(row.severity))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub resolved: usize,
    pub unresolved: usize,
}

impl ErrorStats {
    pub fn from_logs(rows: &[ErrorLog]) -> Self {
        rows.iter().fold(
            ErrorStats {
                total: rows.len(),
                ..ErrorStats::default()
            },
            |mut stats, row| {
                match row.severity {
                    Severity::High => stats.high += 1,
                    Severity::Medium => stats.medium += 1,
                    Severity::Low => stats.low += 1,
                }
                if row.resolved {
                    stats.resolved += 1;
                } else {
                    stats.unresolved += 1;
                }
                stats
            },
        )
    }
}

pub const ERROR_LOGS: &[ErrorLog] = &[
    ErrorLog {
        id: "ERR-001",
        timestamp: "2024-01-15 14:23:45",
        severity: Severity::High,
        source: "Excel Parser",
        message: "Missing supervisor name in row 5 of well_data_batch_12.xlsx",
        file: "well_data_batch_12.xlsx",
        resolved: false,
    },
    ErrorLog {
        id: "ERR-002",
        timestamp: "2024-01-15 13:45:12",
        severity: Severity::Medium,
        source: "Data Validation",
        message: "Invalid zip code format '7970' in customer record for Texas Oil Corp",
        file: "customer_update_jan15.xlsx",
        resolved: true,
    },
    ErrorLog {
        id: "ERR-003",
        timestamp: "2024-01-15 12:30:28",
        severity: Severity::Low,
        source: "Upload Process",
        message: "File size exceeds recommended limit (15.2MB > 10MB)",
        file: "complete_logs_Q4_2023.xlsx",
        resolved: false,
    },
    ErrorLog {
        id: "ERR-004",
        timestamp: "2024-01-15 11:15:33",
        severity: Severity::High,
        source: "Database",
        message: "Connection timeout while saving job log JL-2024-047",
        file: "system_operation",
        resolved: true,
    },
    ErrorLog {
        id: "ERR-005",
        timestamp: "2024-01-15 10:22:41",
        severity: Severity::Medium,
        source: "Excel Parser",
        message: "Unknown material type 'Custom Drill Bit X12' in materials column",
        file: "materials_inventory_jan.xlsx",
        resolved: false,
    },
    ErrorLog {
        id: "ERR-006",
        timestamp: "2024-01-15 09:45:17",
        severity: Severity::Low,
        source: "User Authentication",
        message: "Multiple login attempts detected for user: supervisor.mike@company.com",
        file: "auth_system",
        resolved: true,
    },
    ErrorLog {
        id: "ERR-007",
        timestamp: "2024-01-15 08:33:52",
        severity: Severity::High,
        source: "Data Validation",
        message: "Duplicate job ID 'JL-2024-033' found in uploaded data",
        file: "job_logs_weekly.xlsx",
        resolved: false,
    },
];
