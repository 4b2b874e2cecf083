use super::{Tone, Trend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Success,
    Error,
    Info,
}

impl ActivityKind {
    pub fn tone(self) -> Tone {
        match self {
            ActivityKind::Success => Tone::Default,
            ActivityKind::Error => Tone::Destructive,
            ActivityKind::Info => Tone::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub action: &'static str,
    /// Supervisor, file, user or customer the event refers to.
    pub subject: &'static str,
    pub time: &'static str,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNote {
    pub title: &'static str,
    pub time: &'static str,
    pub tone: Tone,
}

pub const STATS: &[StatCard] = &[
    StatCard {
        title: "Total Job Logs",
        value: "1,247",
        change: "+12.5%",
        icon: "📄",
        trend: Trend::Up,
    },
    StatCard {
        title: "Active Supervisors",
        value: "28",
        change: "+2 this month",
        icon: "👥",
        trend: Trend::Up,
    },
    StatCard {
        title: "Pending Reviews",
        value: "43",
        change: "-8.2%",
        icon: "⚠",
        trend: Trend::Down,
    },
    StatCard {
        title: "Completed Jobs",
        value: "892",
        change: "+15.3%",
        icon: "✔",
        trend: Trend::Up,
    },
];

pub const RECENT_ACTIVITIES: &[Activity] = &[
    Activity {
        id: 1,
        action: "New job log uploaded",
        subject: "Mike Johnson",
        time: "2 minutes ago",
        kind: ActivityKind::Success,
    },
    Activity {
        id: 2,
        action: "Error in Excel parsing",
        subject: "well_data_batch_12.xlsx",
        time: "15 minutes ago",
        kind: ActivityKind::Error,
    },
    Activity {
        id: 3,
        action: "Supervisor profile updated",
        subject: "Sarah Williams",
        time: "1 hour ago",
        kind: ActivityKind::Info,
    },
    Activity {
        id: 4,
        action: "Job log validated",
        subject: "Texas Oil Corp",
        time: "2 hours ago",
        kind: ActivityKind::Success,
    },
    Activity {
        id: 5,
        action: "New user registered",
        subject: "Robert Chen",
        time: "3 hours ago",
        kind: ActivityKind::Info,
    },
];

pub const RECENT_ERRORS: &[ErrorNote] = &[
    ErrorNote {
        title: "Excel parsing failed",
        time: "2 mins ago",
        tone: Tone::Destructive,
    },
    ErrorNote {
        title: "Missing supervisor data",
        time: "15 mins ago",
        tone: Tone::Secondary,
    },
    ErrorNote {
        title: "Upload timeout",
        time: "1 hour ago",
        tone: Tone::Secondary,
    },
];
