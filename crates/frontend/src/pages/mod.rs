mod dashboard;
mod login;
mod register;
mod sections;

pub use dashboard::DashboardLayout;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use sections::NotFoundPage;

/// Set the browser tab title
pub(crate) fn set_title(title: &str) {
    gloo::utils::document().set_title(&format!("{title} · Sales Console"));
}
