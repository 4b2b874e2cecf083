use super::{Searchable, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Completed,
    InProgress,
    UnderReview,
}

impl JobStatus {
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Completed => "Completed",
            JobStatus::InProgress => "In Progress",
            JobStatus::UnderReview => "Under Review",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            JobStatus::Completed => Tone::Default,
            JobStatus::InProgress => Tone::Secondary,
            JobStatus::UnderReview => Tone::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLog {
    pub id: &'static str,
    pub customer: &'static str,
    pub well_name: &'static str,
    pub supervisor: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
    pub status: JobStatus,
    pub date: &'static str,
    pub tools: &'static [&'static str],
    pub observations: &'static str,
}

impl JobLog {
    pub fn location(&self) -> String {
        format!("{}, {}", self.state, self.zip_code)
    }
}

impl Searchable for JobLog {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer, self.well_name, self.supervisor, self.id]
    }
}

pub const JOB_LOGS: &[JobLog] = &[
    JobLog {
        id: "JL-2024-001",
        customer: "Texas Oil Corporation",
        well_name: "Permian Basin Well #47",
        supervisor: "Mike Johnson",
        state: "Texas",
        zip_code: "79701",
        status: JobStatus::Completed,
        date: "2024-01-15",
        tools: &["Drill Pipe", "Fishing Tool", "Casing"],
        observations: "Successful completion of drilling operation",
    },
    JobLog {
        id: "JL-2024-002",
        customer: "Gulf Coast Energy",
        well_name: "Offshore Platform Alpha",
        supervisor: "Sarah Williams",
        state: "Louisiana",
        zip_code: "70112",
        status: JobStatus::InProgress,
        date: "2024-01-14",
        tools: &["Mud Pump", "BOP", "Rotary Table"],
        observations: "Ongoing drilling at 8,500 ft depth",
    },
    JobLog {
        id: "JL-2024-003",
        customer: "Rocky Mountain Oil",
        well_name: "Bakken Shale Site 12",
        supervisor: "Robert Chen",
        state: "North Dakota",
        zip_code: "58801",
        status: JobStatus::UnderReview,
        date: "2024-01-13",
        tools: &["Hydraulic Fracturing Unit", "Proppant"],
        observations: "Awaiting geological survey results",
    },
    JobLog {
        id: "JL-2024-004",
        customer: "California Energy Corp",
        well_name: "Central Valley Well #23",
        supervisor: "Lisa Rodriguez",
        state: "California",
        zip_code: "93230",
        status: JobStatus::Completed,
        date: "2024-01-12",
        tools: &["Electric Pump", "Tubing", "Packer"],
        observations: "Production test completed successfully",
    },
];
