use super::Searchable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub size: &'static str,
    pub last_generated: &'static str,
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.description]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
    AllTime,
}

impl DateRange {
    pub const CHOICES: [DateRange; 5] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
        DateRange::LastYear,
        DateRange::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
            DateRange::LastYear => "Last year",
            DateRange::AllTime => "All time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Excel,
    Csv,
    Pdf,
}

impl ExportFormat {
    pub const CHOICES: [ExportFormat; 3] = [ExportFormat::Excel, ExportFormat::Csv, ExportFormat::Pdf];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel (.xlsx)",
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Reports ticked for download, in the order they were ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSelection {
    selected: Vec<&'static str>,
}

impl ReportSelection {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| *s == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn set(&mut self, id: &'static str, checked: bool) {
        if checked {
            if !self.is_selected(id) {
                self.selected.push(id);
            }
        } else {
            self.selected.retain(|s| *s != id);
        }
    }

    pub fn toggle(&mut self, id: &'static str) {
        let checked = !self.is_selected(id);
        self.set(id, checked);
    }

    pub fn all_selected(&self, reports: &[Report]) -> bool {
        !reports.is_empty() && self.selected.len() == reports.len()
    }

    /// Selects every report, or clears the selection when all are already selected.
    pub fn toggle_all(&mut self, reports: &[Report]) {
        if self.all_selected(reports) {
            self.selected.clear();
        } else {
            self.selected = reports.iter().map(|r| r.id).collect();
        }
    }

    /// Simulated download: resolves the selected reports and logs each one.
    pub fn download<'a>(&self, reports: &'a [Report]) -> Vec<&'a Report> {
        let picked: Vec<&Report> = self
            .selected
            .iter()
            .filter_map(|id| reports.iter().find(|r| r.id == *id))
            .collect();
        for report in &picked {
            log::info!("Downloading: {}", report.name);
        }
        picked
    }
}

pub const REPORTS: &[Report] = &[
    Report {
        id: "job-logs",
        name: "Complete Job Logs Report",
        description: "All job logs with customer, supervisor, and operational details",
        size: "2.4 MB",
        last_generated: "2024-01-15 10:30 AM",
    },
    Report {
        id: "supervisor-summary",
        name: "Supervisor Performance Summary",
        description: "Performance metrics and completion rates by supervisor",
        size: "1.1 MB",
        last_generated: "2024-01-15 09:15 AM",
    },
    Report {
        id: "customer-analysis",
        name: "Customer Analysis Report",
        description: "Customer activity, locations, and job frequency analysis",
        size: "3.2 MB",
        last_generated: "2024-01-15 08:45 AM",
    },
    Report {
        id: "materials-inventory",
        name: "Materials & Tools Usage",
        description: "Inventory tracking and usage patterns for materials and tools",
        size: "1.8 MB",
        last_generated: "2024-01-14 05:30 PM",
    },
    Report {
        id: "error-analysis",
        name: "Error Analysis Report",
        description: "Data validation errors and system issues breakdown",
        size: "0.8 MB",
        last_generated: "2024-01-14 03:20 PM",
    },
    Report {
        id: "regional-breakdown",
        name: "Regional Operations Breakdown",
        description: "Job distribution and performance by state and region",
        size: "2.1 MB",
        last_generated: "2024-01-14 02:10 PM",
    },
];
