use crate::app::widgets::{badge, card, page_header, search_box};
use crate::data::filter_rows;
use crate::data::users::{
    role_tone, RoleKind, User, DEPARTMENT_CHOICES, ROLE_CHOICES, USERS,
};
use eframe::egui::{self, RichText};

/// Fields of the "Add New User" dialog. Nothing is created from it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewUserDraft {
    pub name: String,
    pub email: String,
    pub role: Option<&'static str>,
    pub department: Option<&'static str>,
}

#[derive(Debug, Default)]
pub struct UsersPage {
    pub search: String,
    pub add_dialog_open: bool,
    pub draft: NewUserDraft,
}

impl UsersPage {
    pub fn visible_rows(&self) -> Vec<&'static User> {
        filter_rows(USERS, &self.search)
    }

    pub fn close_dialog(&mut self) {
        self.add_dialog_open = false;
        self.draft = NewUserDraft::default();
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        page_header(ui, "User Management", "Manage system users, roles, and permissions");

        card(
            ui,
            "System Users",
            "Manage user accounts, roles, and access permissions for the drilling operations system",
            |ui| {
                ui.horizontal(|ui| {
                    search_box(ui, &mut self.search, "Search users by name, email, or role...");
                    if ui.button("➕ Add User").clicked() {
                        self.add_dialog_open = true;
                    }
                });
                ui.add_space(8.0);

                let rows = self.visible_rows();
                egui::Grid::new("users")
                    .striped(true)
                    .num_columns(6)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        for heading in [
                            "User",
                            "Role",
                            "Department",
                            "Status",
                            "Jobs Completed",
                            "Last Active",
                        ] {
                            ui.label(RichText::new(heading).strong());
                        }
                        ui.end_row();

                        for user in rows {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(user.avatar).strong().monospace());
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(user.name).strong());
                                    ui.label(RichText::new(format!("✉ {}", user.email)).small().weak());
                                });
                            });
                            ui.horizontal(|ui| {
                                ui.label(RoleKind::of(user.role).icon());
                                badge(ui, user.role, role_tone(user.role));
                            });
                            ui.label(user.department);
                            badge(ui, user.status.label(), user.status.tone());
                            ui.label(RichText::new(user.jobs_completed.to_string()).strong());
                            ui.label(RichText::new(user.last_active).weak());
                            ui.end_row();
                        }
                    });
            },
        );

        if self.add_dialog_open {
            self.show_add_dialog(ui.ctx());
        }
    }

    fn show_add_dialog(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut close = false;
        egui::Window::new("Add New User")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Create a new user account for the drilling operations system")
                        .weak(),
                );
                ui.add_space(8.0);
                ui.label("Full Name");
                ui.add(egui::TextEdit::singleline(&mut self.draft.name).hint_text("Enter full name"));
                ui.label("Email Address");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.email)
                        .hint_text("Enter email address"),
                );
                ui.label("Role");
                choice(ui, "new_user_role", "Select role", &mut self.draft.role, ROLE_CHOICES);
                ui.label("Department");
                choice(
                    ui,
                    "new_user_department",
                    "Select department",
                    &mut self.draft.department,
                    DEPARTMENT_CHOICES,
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Create User").clicked() {
                        log::info!("Add user dialog submitted for '{}'", self.draft.name);
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
        if !open || close {
            self.close_dialog();
        }
    }
}

fn choice(
    ui: &mut egui::Ui,
    id: &str,
    placeholder: &'static str,
    value: &mut Option<&'static str>,
    options: &[&'static str],
) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.unwrap_or(placeholder))
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, Some(*option), *option);
            }
        });
}
