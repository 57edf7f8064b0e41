use super::*;

#[test]
fn new_rejects_invalid_url() {
    let result = DirectoryClient::new("not a url", 5, "beacon-test/0.1");
    assert!(
        matches!(result, Err(NetworkError::InvalidUrl { ref url, .. }) if url == "not a url"),
        "expected InvalidUrl, got an unexpected result"
    );
}

#[test]
fn new_keeps_url_path_and_trailing_slash() {
    let client = DirectoryClient::new("https://api.sendbeacon.com/team/schools/", 5, "ua")
        .expect("client construction should not fail");
    assert_eq!(
        client.url().as_str(),
        "https://api.sendbeacon.com/team/schools/"
    );
}

#[test]
fn from_config_uses_directory_url() {
    let config = AppConfig {
        env: beacon_core::Environment::Test,
        log_level: "info".to_string(),
        directory_url: "http://localhost:9000/schools".to_string(),
        request_timeout_secs: 5,
        user_agent: "beacon-test/0.1".to_string(),
        geolocation_timeout_ms: 4000,
        geolocation_high_accuracy: true,
        position: None,
    };
    let client = DirectoryClient::from_config(&config).expect("client should build");
    assert_eq!(client.url().as_str(), "http://localhost:9000/schools");
}
