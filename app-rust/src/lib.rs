mod admin_dashboard;
mod app;
mod errors;
mod login;
pub mod messages;
mod navigation;
mod user_dashboard;
mod view_state;

pub use admin_dashboard::{AdminDashboard, LinkForm};
pub use app::PictureLinkApp;
pub use errors::AppError;
pub use login::{AdminLogin, UserLogin};
pub use navigation::{LoginSelection, Route};
pub use user_dashboard::UserDashboard;
pub use view_state::ViewState;
