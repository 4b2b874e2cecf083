use super::{Tone, Trend};

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    pub state: &'static str,
    pub jobs: u32,
    pub completion: f32,
    pub supervisors: u32,
}

impl RegionRow {
    pub fn rating(&self) -> (&'static str, Tone) {
        if self.completion > 95.0 {
            ("Excellent", Tone::Default)
        } else if self.completion > 90.0 {
            ("Good", Tone::Secondary)
        } else {
            ("Needs Improvement", Tone::Destructive)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupervisorRow {
    pub name: &'static str,
    pub jobs: u32,
    pub success: f32,
    pub avg_duration_days: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRow {
    pub item: &'static str,
    pub usage: f32,
    pub trend: Trend,
}

impl MaterialRow {
    pub fn tone(&self) -> Tone {
        match self.trend {
            Trend::Up => Tone::Default,
            Trend::Down => Tone::Destructive,
            Trend::Stable => Tone::Secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
}

impl Period {
    pub const CHOICES: [Period; 4] = [
        Period::Last7Days,
        Period::Last30Days,
        Period::Last90Days,
        Period::LastYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Period::Last7Days => "Last 7 days",
            Period::Last30Days => "Last 30 days",
            Period::Last90Days => "Last 90 days",
            Period::LastYear => "Last year",
        }
    }
}

pub const PERFORMANCE_METRICS: &[Metric] = &[
    Metric {
        label: "Total Operations",
        value: "1,247",
        change: "+12.5%",
        trend: Trend::Up,
    },
    Metric {
        label: "Success Rate",
        value: "94.2%",
        change: "+2.1%",
        trend: Trend::Up,
    },
    Metric {
        label: "Average Job Duration",
        value: "4.8 days",
        change: "-0.7 days",
        trend: Trend::Down,
    },
    Metric {
        label: "Material Efficiency",
        value: "87.3%",
        change: "+5.2%",
        trend: Trend::Up,
    },
];

pub const REGIONS: &[RegionRow] = &[
    RegionRow { state: "Texas", jobs: 387, completion: 96.2, supervisors: 12 },
    RegionRow { state: "Louisiana", jobs: 242, completion: 93.8, supervisors: 8 },
    RegionRow { state: "North Dakota", jobs: 189, completion: 91.5, supervisors: 6 },
    RegionRow { state: "California", jobs: 156, completion: 95.1, supervisors: 5 },
    RegionRow { state: "Oklahoma", jobs: 134, completion: 92.7, supervisors: 4 },
    RegionRow { state: "Wyoming", jobs: 89, completion: 94.4, supervisors: 3 },
];

pub const TOP_SUPERVISORS: &[SupervisorRow] = &[
    SupervisorRow { name: "Mike Johnson", jobs: 47, success: 97.9, avg_duration_days: 4.2 },
    SupervisorRow { name: "Sarah Williams", jobs: 32, success: 96.9, avg_duration_days: 4.5 },
    SupervisorRow { name: "Robert Chen", jobs: 29, success: 93.1, avg_duration_days: 5.1 },
    SupervisorRow { name: "Lisa Rodriguez", jobs: 28, success: 95.5, avg_duration_days: 4.3 },
    SupervisorRow { name: "David Thompson", jobs: 25, success: 92.0, avg_duration_days: 5.8 },
];

pub const MATERIAL_USAGE: &[MaterialRow] = &[
    MaterialRow { item: "Drill Pipe", usage: 89.2, trend: Trend::Stable },
    MaterialRow { item: "Casing", usage: 76.5, trend: Trend::Up },
    MaterialRow { item: "Mud Pump", usage: 67.8, trend: Trend::Down },
    MaterialRow { item: "BOP", usage: 82.1, trend: Trend::Up },
    MaterialRow { item: "Fishing Tools", usage: 45.3, trend: Trend::Stable },
];
