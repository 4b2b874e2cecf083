use super::{Searchable, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            UserStatus::Active => Tone::Default,
            UserStatus::Inactive => Tone::Secondary,
        }
    }
}

/// Icon family shown next to a role badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Manager,
    Supervisor,
    Staff,
}

impl RoleKind {
    pub fn of(role: &str) -> Self {
        if role.contains("Manager") {
            RoleKind::Manager
        } else if role.contains("Supervisor") {
            RoleKind::Supervisor
        } else {
            RoleKind::Staff
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RoleKind::Manager => "🛡",
            RoleKind::Supervisor => "✔",
            RoleKind::Staff => "👤",
        }
    }
}

pub fn role_tone(role: &str) -> Tone {
    if role.contains("Manager") {
        Tone::Destructive
    } else if role.contains("Senior") {
        Tone::Default
    } else if role.contains("Supervisor") {
        Tone::Secondary
    } else {
        Tone::Outline
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub status: UserStatus,
    pub last_active: &'static str,
    pub jobs_completed: u32,
    pub avatar: &'static str,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.email, self.role, self.department]
    }
}

pub const ROLE_CHOICES: &[&str] = &[
    "Field Supervisor",
    "Senior Supervisor",
    "Operations Manager",
    "Data Analyst",
    "Safety Coordinator",
];

pub const DEPARTMENT_CHOICES: &[&str] = &["Field Operations", "Management", "Analytics", "Safety"];

pub const USERS: &[User] = &[
    User {
        id: 1,
        name: "Mike Johnson",
        email: "mike.johnson@example.com",
        role: "Senior Supervisor",
        department: "Field Operations",
        status: UserStatus::Active,
        last_active: "2 hours ago",
        jobs_completed: 47,
        avatar: "MJ",
    },
    User {
        id: 2,
        name: "Sarah Williams",
        email: "sarah.williams@example.com",
        role: "Field Supervisor",
        department: "Field Operations",
        status: UserStatus::Active,
        last_active: "1 hour ago",
        jobs_completed: 32,
        avatar: "SW",
    },
    User {
        id: 3,
        name: "Robert Chen",
        email: "robert.chen@example.com",
        role: "Operations Manager",
        department: "Management",
        status: UserStatus::Active,
        last_active: "30 minutes ago",
        jobs_completed: 89,
        avatar: "RC",
    },
    User {
        id: 4,
        name: "Lisa Rodriguez",
        email: "lisa.rodriguez@example.com",
        role: "Field Supervisor",
        department: "Field Operations",
        status: UserStatus::Inactive,
        last_active: "2 days ago",
        jobs_completed: 28,
        avatar: "LR",
    },
    User {
        id: 5,
        name: "David Thompson",
        email: "david.thompson@example.com",
        role: "Data Analyst",
        department: "Analytics",
        status: UserStatus::Active,
        last_active: "5 minutes ago",
        jobs_completed: 15,
        avatar: "DT",
    },
    User {
        id: 6,
        name: "Jennifer Lee",
        email: "jennifer.lee@example.com",
        role: "Safety Coordinator",
        department: "Safety",
        status: UserStatus::Active,
        last_active: "1 hour ago",
        jobs_completed: 23,
        avatar: "JL",
    },
];
