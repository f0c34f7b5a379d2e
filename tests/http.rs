use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Sentiment {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
struct MoodEntry {
    id: String,
    date: String,
    mood: String,
    text: String,
    sentiment: Sentiment,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct NewEntryResponse {
    entry: MoodEntry,
    insight: String,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    greeting: String,
    today: Option<MoodEntry>,
    weekly_positive_percent: u32,
    streak_days: u32,
    last_7_days: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct AnalyticsResponse {
    last_7_days: Vec<Value>,
    last_30_days: Vec<Value>,
    distribution: Vec<Value>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("moodify_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_moodify"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("MOODIFY_ANALYSIS_DELAY_MS", "0")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn log_mood(client: &Client, base_url: &str, mood: &str, text: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/entries"))
        .json(&serde_json::json!({ "mood": mood, "text": text }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_log_mood_creates_todays_entry() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = log_mood(&client, &server.base_url, "happy", "  I am happy and great  ").await;
    assert!(response.status().is_success());
    let created: NewEntryResponse = response.json().await.unwrap();

    assert!(!created.entry.id.is_empty());
    assert_eq!(created.entry.mood, "happy");
    assert_eq!(created.entry.text, "I am happy and great");
    assert_eq!(created.entry.sentiment.label, "POSITIVE");
    assert!((0.7..1.0).contains(&created.entry.sentiment.score));
    assert_eq!(created.entry.date.len(), 10);
    assert!(created.entry.timestamp.starts_with(&created.entry.date));
    assert!(!created.insight.is_empty());

    let today: Option<MoodEntry> = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let today = today.expect("today's entry");
    assert_eq!(today.id, created.entry.id);

    let entries: Vec<MoodEntry> = client
        .get(format!("{}/api/entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries[0].id, created.entry.id);
}

#[tokio::test]
async fn http_rejects_invalid_submissions() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let unknown = log_mood(&client, &server.base_url, "ecstatic", "hello").await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

    let blank = log_mood(&client, &server.base_url, "sad", "   ").await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_dashboard_and_analytics_reflect_entries() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = log_mood(&client, &server.base_url, "very-sad", "I feel sad and awful").await;
    let created: NewEntryResponse = response.json().await.unwrap();
    assert_eq!(created.entry.sentiment.label, "NEGATIVE");

    let dashboard: DashboardResponse = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!dashboard.greeting.is_empty());
    assert!(dashboard.today.is_some());
    assert!(dashboard.streak_days >= 1);
    assert!((4..=20).contains(&dashboard.weekly_positive_percent));
    assert_eq!(dashboard.last_7_days.len(), 7);

    let analytics: AnalyticsResponse = client
        .get(format!("{}/api/analytics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(analytics.last_7_days.len(), 7);
    assert_eq!(analytics.last_30_days.len(), 30);
    assert!(analytics.last_30_days[29]["value"].is_u64());
    assert!(!analytics.distribution.is_empty());
    assert!(
        analytics
            .distribution
            .iter()
            .any(|slice| slice["name"] == "Sad")
    );
}

#[tokio::test]
async fn http_preferences_and_profile_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let prefs = serde_json::json!({
        "dailyReminders": false,
        "weeklyReports": true,
        "shareData": false,
        "aiAnalysis": true
    });
    let response = client
        .put(format!("{}/api/preferences", server.base_url))
        .json(&prefs)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let saved: Value = client
        .get(format!("{}/api/preferences", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved, prefs);

    let profile: Value = client
        .post(format!("{}/api/profile/premium", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["isPremium"], true);

    let renamed = client
        .put(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(renamed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_index_renders_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Moodify"));
    assert!(body.contains("% positive"));
}
