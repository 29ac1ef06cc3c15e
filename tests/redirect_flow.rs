//! End-to-end tests for the redirect service.

use std::net::SocketAddr;

use redirector::config::parse_config;
use redirector::http::HttpServer;
use redirector::lifecycle::Shutdown;
use redirector::routing::RedirectTable;

const RULES_YAML: &str = "\
- path: /a
  url: https://x.com
- path: /b
  url: https://y.com
- path: /a
  url: https://z.com
";

/// Boot a server on an ephemeral port and return its address plus the
/// shutdown handle that stops it.
async fn start_server(table: RedirectTable) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(table);

    tokio::spawn(async move {
        let _ = server.run_until(listener, rx).await;
    });

    (addr, shutdown)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_mapped_path_redirects_to_last_occurrence() {
    let table = RedirectTable::from_yaml(RULES_YAML.as_bytes()).unwrap();
    let (addr, shutdown) = start_server(table).await;

    let res = client()
        .get(format!("http://{}/a", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "https://z.com");

    let res = client()
        .get(format!("http://{}/b", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "https://y.com");

    shutdown.trigger();
}

#[tokio::test]
async fn test_post_to_mapped_path_redirects() {
    let table = RedirectTable::from_yaml(RULES_YAML.as_bytes()).unwrap();
    let (addr, shutdown) = start_server(table).await;

    let res = client()
        .post(format!("http://{}/a", addr))
        .body("payload")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 302);
    assert_eq!(res.headers()["location"], "https://z.com");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unmapped_path_falls_back_to_hello() {
    let table = RedirectTable::from_yaml(RULES_YAML.as_bytes()).unwrap();
    let (addr, shutdown) = start_server(table).await;

    let res = client()
        .get(format!("http://{}/unknown", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello");

    shutdown.trigger();
}

#[tokio::test]
async fn test_trailing_slash_is_not_normalized() {
    let table = RedirectTable::from_yaml(RULES_YAML.as_bytes()).unwrap();
    let (addr, shutdown) = start_server(table).await;

    let res = client()
        .get(format!("http://{}/a/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello");

    shutdown.trigger();
}

#[tokio::test]
async fn test_empty_table_serves_fallback_everywhere() {
    let (addr, shutdown) = start_server(RedirectTable::default()).await;

    let res = client().get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello");

    shutdown.trigger();
}

#[test]
fn test_malformed_rules_prevent_startup() {
    // The table (and therefore the handler) must never come into existence
    // from malformed rule data.
    assert!(RedirectTable::from_yaml(b"not: [valid").is_err());

    let config = parse_config("rules_file = \"/nonexistent/rules.yaml\"\n").unwrap();
    assert!(redirector::config::load_rules(&config).is_err());
}
