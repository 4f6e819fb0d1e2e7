use dotenvy::dotenv;
use picture_link_sdk::{AuthService, AuthClient, FirebaseConfig, LinkService, LinkStoreClient};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = FirebaseConfig::from_env()?;
    let auth = AuthClient::new(config.auth_options());
    let store = LinkStoreClient::new(config.link_store_options());

    if let (Ok(email), Ok(password)) = (env::var("PICTURE_LINK_EMAIL"), env::var("PICTURE_LINK_PASSWORD")) {
        if auth.login(&email, &password).await {
            println!("{:#?}", auth.current_session());
        } else {
            println!("Login failed for {email}");
        }
    }

    for link in store.list_all().await {
        println!("{} [{}] -> {}", link.title, link.button_label, link.target_url);
    }

    Ok(())
}
