use dotenvy::dotenv;
use picture_link_app::{PictureLinkApp, Route};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = PictureLinkApp::from_env()?;

    let mut login = app.admin_login();
    login.email = env::var("PICTURE_LINK_EMAIL")?;
    login.password = env::var("PICTURE_LINK_PASSWORD")?;

    if login.login().await != Some(Route::AdminDashboard) {
        println!("{}", login.state.error_message);
        return Ok(());
    }

    let mut dashboard = app.admin_dashboard();
    dashboard.initialize().await;
    for link in &dashboard.picture_links {
        println!(
            "{} [{}] -> {} (by {})",
            link.title, link.button_label, link.target_url, link.created_by
        );
    }

    dashboard.logout().await;
    Ok(())
}
