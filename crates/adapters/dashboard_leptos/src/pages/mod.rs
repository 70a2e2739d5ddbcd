mod dashboard;
mod login;
mod logout;
mod not_found;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use not_found::NotFound;
