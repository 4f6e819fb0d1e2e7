use dotenvy::dotenv;
use picture_link_sdk::{FirebaseConfig, LinkStoreClient, PictureLink};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path: PathBuf = env::args()
        .nth(1)
        .ok_or("usage: upload-image <path> <target-url>")?
        .into();
    let target_url = env::args()
        .nth(2)
        .ok_or("usage: upload-image <path> <target-url>")?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or("image path has no file name")?
        .to_string();

    let config = FirebaseConfig::from_env()?;
    let store = LinkStoreClient::new(config.link_store_options());

    let image_url = store.try_upload_image(&path, &file_name).await?;
    let link = PictureLink::new(file_name, "Open", target_url)
        .with_image(image_url, path.display().to_string());
    store.try_create(&link).await?;

    println!("Created picture link {}", link.id());
    Ok(())
}
