use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn app_builds_with_default_config() {
    let config = ServerConfig {
        port: 0,
        assets_dir: PathBuf::from("public"),
    };
    assert!(app(&config).is_ok());
}
