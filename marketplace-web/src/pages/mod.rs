mod admin_dashboard;
mod home;
pub mod login;
mod not_found;
mod products;
mod register;
mod store;
mod user_dashboard;

pub use admin_dashboard::AdminDashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
pub use register::RegisterPage;
pub use store::StorePage;
pub use user_dashboard::UserDashboardPage;
