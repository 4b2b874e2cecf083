#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    JobLogs,
    Upload,
    Download,
    Users,
    Analytics,
    ErrorLogs,
    Settings,
    NotFound,
}

impl Route {
    pub fn resolve(path: &str) -> Self {
        match normalize(path).as_str() {
            "/" | "/dashboard" => Route::Dashboard,
            "/logs" => Route::JobLogs,
            "/upload" => Route::Upload,
            "/download" => Route::Download,
            "/users" => Route::Users,
            "/analytics" => Route::Analytics,
            "/errors" => Route::ErrorLogs,
            "/settings" => Route::Settings,
            _ => Route::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { title: "Dashboard", url: "/", icon: "🏠" },
    NavItem { title: "Job Logs", url: "/logs", icon: "📄" },
    NavItem { title: "Upload Data", url: "/upload", icon: "📤" },
    NavItem { title: "Download Reports", url: "/download", icon: "📥" },
    NavItem { title: "Users", url: "/users", icon: "👥" },
    NavItem { title: "Analytics", url: "/analytics", icon: "📊" },
    NavItem { title: "Error Logs", url: "/errors", icon: "⚠" },
    NavItem { title: "Settings", url: "/settings", icon: "⚙" },
];

/// Leading slash, no trailing slash, no surrounding whitespace.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// `/` is only active on the root itself; other items match by prefix.
pub fn is_active(current: &str, item_url: &str) -> bool {
    if item_url == "/" {
        current == "/"
    } else {
        current.starts_with(item_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::resolve("/"), Route::Dashboard);
        assert_eq!(Route::resolve("/dashboard"), Route::Dashboard);
        assert_eq!(Route::resolve("/logs"), Route::JobLogs);
        assert_eq!(Route::resolve("upload/"), Route::Upload);
        assert_eq!(Route::resolve("/errors"), Route::ErrorLogs);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::resolve("/wells/47"), Route::NotFound);
        assert_eq!(Route::resolve("/logs/extra"), Route::NotFound);
    }

    #[test]
    fn root_item_is_only_active_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/logs", "/"));
        assert!(is_active("/logs", "/logs"));
        assert!(!is_active("/dashboard", "/"));
    }
}
