use crate::config::Config;
use astra::{Body, ConnectionInfo, Request, ResponseBuilder, Server};
use http::Method;
use std::fs;
use std::io::Read;
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

static FIXTURE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory holding `categories.json` and `listings.json`.
pub struct Fixture {
    pub dir: PathBuf,
}

impl Fixture {
    pub fn new(categories: &str, listings: &str) -> Self {
        let n = FIXTURE_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "listing_seeder_test_{}_{}",
            std::process::id(),
            n
        ));
        fs::create_dir_all(&dir).expect("create fixture dir");
        fs::write(dir.join("categories.json"), categories).expect("write categories");
        fs::write(dir.join("listings.json"), listings).expect("write listings");

        Self { dir }
    }

    pub fn categories_path(&self) -> PathBuf {
        self.dir.join("categories.json")
    }

    pub fn listings_path(&self) -> PathBuf {
        self.dir.join("listings.json")
    }

    pub fn config(&self, api_url: &str) -> Config {
        Config {
            api_url: api_url.to_string(),
            categories_path: self.categories_path(),
            listings_path: self.listings_path(),
            dry_run: false,
            request_timeout: Some(Duration::from_secs(5)),
        }
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Stand-in for the listings API. Records every request and answers with
/// `statuses[i]` for the i-th request (the last entry repeats).
pub struct MockApi {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn start(statuses: Vec<u16>) -> Self {
        let port = free_port();
        let addr = format!("127.0.0.1:{port}");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let bind_addr = addr.clone();
        thread::spawn(move || {
            let server = Server::bind(&bind_addr).max_workers(4);
            let _ = server.serve(move |req: Request, _info: ConnectionInfo| {
                let method = req.method().clone();
                let path = req.uri().path().to_string();
                let content_type = req
                    .headers()
                    .get("Content-Type")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);

                let mut raw = String::new();
                req.into_body().reader().read_to_string(&mut raw).unwrap();
                let body = serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null);

                let mut log = recorded.lock().unwrap();
                let status = statuses
                    .get(log.len())
                    .or_else(|| statuses.last())
                    .copied()
                    .unwrap_or(201);
                log.push(RecordedRequest {
                    method,
                    path,
                    content_type,
                    body,
                });

                ResponseBuilder::new()
                    .status(status)
                    .header("Content-Type", "application/json")
                    .body(Body::from("{}".to_string()))
                    .unwrap()
            });
        });

        wait_until_listening(&addr);

        Self {
            url: format!("http://{addr}/api/listings"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// A localhost URL nothing listens on.
pub fn dead_url() -> String {
    format!("http://127.0.0.1:{}/api/listings", free_port())
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .expect("no free port")
}

fn wait_until_listening(addr: &str) {
    for _ in 0..100 {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        thread::sleep(Duration::from_millis(20));
    }
    panic!("mock API never came up on {addr}");
}

pub const CATEGORIES_JSON: &str = r#"[
  {
    "slug": "elektronik",
    "name": "Elektronik",
    "subCategories": [
      { "slug": "telefon", "name": "Telefon" },
      { "slug": "bilgisayar", "name": "Bilgisayar" }
    ]
  },
  {
    "slug": "ev-bahce",
    "name": "Ev & Bahçe",
    "subCategories": [
      { "slug": "mobilya", "name": "Mobilya" }
    ]
  },
  {
    "slug": "is-ilanlari",
    "name": "İş İlanları"
  }
]"#;
