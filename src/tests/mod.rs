use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::{load_config, ListingConfig};
use crate::fetcher::{self, FetchErrorKind};
use crate::filter;
use crate::pager::RequestPager;
use crate::records::UserRecord;
use crate::render::RenderResult;
use crate::widget::ListingWidget;

fn record(email: &str, first_name: &str, last_name: &str) -> UserRecord {
    UserRecord {
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

fn users_body(count: usize) -> serde_json::Value {
    let data: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            json!({
                "id": i + 1,
                "email": format!("user{i}@example.com"),
                "first_name": format!("First{i}"),
                "last_name": format!("Last{i}")
            })
        })
        .collect();
    json!({ "page": 1, "total": count, "data": data })
}

fn config_for(server: &MockServer) -> ListingConfig {
    ListingConfig {
        api_url: format!("{}/api/users", server.uri()),
        ..ListingConfig::default()
    }
}

async fn render_at(config: ListingConfig, page_index: i64) -> RenderResult {
    tokio::task::spawn_blocking(move || {
        let widget = ListingWidget::new(config).expect("client build");
        widget.render_at(page_index)
    })
    .await
    .expect("render task")
}

#[test]
fn empty_exclusion_keeps_the_collection_unchanged() {
    let records = vec![
        record("a@x.com", "Alice", "Ames"),
        record("b@x.com", "Bob", "Burke"),
        record("c@x.com", "Cleo", "Cole"),
    ];
    let filtered = filter::filter_by_first_name(records.clone(), "");
    assert_eq!(filtered, records);
}

#[test]
fn exclusion_removes_exact_matches_and_preserves_order() {
    let records = vec![
        record("a@x.com", "Eve", "Adams"),
        record("b@x.com", "Bob", "Burke"),
        record("c@x.com", "Eve", "Cole"),
        record("d@x.com", "eve", "Dunn"),
    ];
    let filtered = filter::filter_by_first_name(records, "Eve");
    let names: Vec<&str> = filtered.iter().map(|r| r.first_name.as_str()).collect();
    // Matching is case-sensitive, so "eve" survives.
    assert_eq!(names, vec!["Bob", "eve"]);
}

#[test]
fn page_size_clamps_non_positive_values() {
    for items_per_page in [0, -3] {
        let config = ListingConfig {
            items_per_page,
            ..ListingConfig::default()
        };
        assert_eq!(config.page_size(), 1);
    }
}

#[test]
fn config_file_merges_over_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config.yml");
    std::fs::write(
        &config_path,
        "api_url: https://example.com/api/users\nitems_per_page: 2\n",
    )
    .expect("write config");

    let config = load_config(&config_path, false)
        .expect("load config")
        .into_config();
    assert_eq!(config.api_url, "https://example.com/api/users");
    assert_eq!(config.items_per_page, 2);
    assert_eq!(config.email_label, "Email");
    assert_eq!(config.forename_label, "Forename");
    assert_eq!(config.surname_label, "Surname");
    assert_eq!(config.exclude_first_name, "");
}

#[test]
fn missing_config_file_is_allowed_when_requested() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("does-not-exist.yml");

    let config = load_config(&config_path, true)
        .expect("load config")
        .into_config();
    assert_eq!(config.api_url, "");
    assert_eq!(config.items_per_page, 4);

    assert!(load_config(&config_path, false).is_err());
}

#[test]
fn default_config_template_parses_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config.yml");
    crate::config::ensure_default_config_file(&config_path).expect("ensure config");

    let config = load_config(&config_path, false)
        .expect("load config")
        .into_config();
    // The template leaves api_url commented out; everything else matches
    // the built-in defaults.
    assert_eq!(config.api_url, "");
    assert_eq!(config.items_per_page, 4);
    assert_eq!(config.timeout_seconds, 5);
}

#[tokio::test]
async fn unconfigured_url_renders_error_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(1)))
        .expect(0)
        .mount(&server)
        .await;

    let result = render_at(ListingConfig::default(), 0).await;
    assert_eq!(result.error_message(), Some("API URL is not configured."));
}

#[tokio::test]
async fn server_error_body_renders_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = render_at(config_for(&server), 0).await;
    let message = result.error_message().expect("error document");
    assert!(message.starts_with("Failed to fetch data from API:"));
}

#[tokio::test]
async fn single_user_renders_one_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "email": "a@x.com", "first_name": "A", "last_name": "B" }]
        })))
        .mount(&server)
        .await;

    let result = render_at(config_for(&server), 0).await;
    let table = result.table().expect("table document");
    assert_eq!(table.rows, vec![vec!["a@x.com", "A", "B"]]);
    let labels: Vec<&str> = table.header.iter().map(|cell| cell.label.as_str()).collect();
    assert_eq!(labels, vec!["Email", "Forename", "Surname"]);
    assert_eq!(result.pager().expect("pager").total_items, 1);
}

#[tokio::test]
async fn remainder_page_reports_totals_to_the_pager() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(10)))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let (result, pager) = tokio::task::spawn_blocking(move || {
        let widget = ListingWidget::new(config).expect("client build");
        let mut pager = RequestPager::from_query("page=2");
        let result = widget.render(&mut pager);
        (result, pager)
    })
    .await
    .expect("render task");

    assert_eq!(result.table().expect("table document").rows.len(), 2);
    assert_eq!(result.pager().expect("pager").total_items, 10);
    assert_eq!(pager.total_pages(), 3);
}

#[tokio::test]
async fn out_of_range_page_renders_empty_table_with_pager() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(3)))
        .mount(&server)
        .await;

    let result = render_at(config_for(&server), 9).await;
    let table = result.table().expect("table document");
    assert!(table.rows.is_empty());
    let pager = result.pager().expect("pager");
    assert_eq!(pager.total_items, 3);
    assert_eq!(pager.current_page, 9);
}

#[tokio::test]
async fn status_is_ignored_when_body_has_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(404).set_body_json(users_body(2)))
        .mount(&server)
        .await;

    let result = render_at(config_for(&server), 0).await;
    assert_eq!(result.table().expect("table document").rows.len(), 2);
}

#[tokio::test]
async fn missing_data_key_renders_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&server)
        .await;

    let result = render_at(config_for(&server), 0).await;
    let message = result.error_message().expect("error document");
    assert!(message.starts_with("Failed to fetch data from API:"));
}

#[tokio::test]
async fn missing_fields_render_as_empty_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "email": "a@x.com" }, 17]
        })))
        .mount(&server)
        .await;

    let result = render_at(config_for(&server), 0).await;
    let table = result.table().expect("table document");
    assert_eq!(
        table.rows,
        vec![vec!["a@x.com", "", ""], vec!["", "", ""]]
    );
}

#[tokio::test]
async fn excluded_first_name_is_dropped_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(5)))
        .mount(&server)
        .await;

    let config = ListingConfig {
        exclude_first_name: "First2".to_string(),
        ..config_for(&server)
    };
    let result = render_at(config, 0).await;
    let table = result.table().expect("table document");
    assert_eq!(result.pager().expect("pager").total_items, 4);
    assert!(table.rows.iter().all(|row| row[1] != "First2"));
}

#[tokio::test]
async fn fetch_error_kinds_follow_the_taxonomy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bad"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = fetcher::build_client(5).expect("client build");

        let err = fetcher::fetch_raw(&client, "").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Configuration);
        assert_eq!(err.to_string(), "API URL is not configured.");

        let err = fetcher::fetch_raw(&client, &format!("{uri}/bad")).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Parse);

        let err = fetcher::fetch_raw(&client, "http://127.0.0.1:1/api/users").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Transport);
        assert!(err.to_string().starts_with("Failed to fetch data from API:"));
    })
    .await
    .expect("fetch task");
}
