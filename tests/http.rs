use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::Command;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OnceCell};
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct MoodEntry {
    mood: String,
    score: u8,
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JournalEntry {
    body: String,
}

#[derive(Debug, Deserialize)]
struct JournalView {
    prompt: String,
    entries: Vec<JournalEntry>,
}

#[derive(Debug, Deserialize)]
struct TrendView {
    values: Vec<u8>,
    polyline: String,
}

#[derive(Debug, Deserialize)]
struct Suggestion {
    title: String,
}

#[derive(Debug, Deserialize)]
struct Streak {
    count: usize,
}

#[derive(Debug, Deserialize)]
struct InsightsView {
    streak: Streak,
    achievements: Vec<String>,
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static BASE_URL: OnceCell<String> = OnceCell::const_new();

/// The server outlives every test, so its pid is killed from an atexit hook.
#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};

    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        PID.store(pid as i32, Ordering::SeqCst);
        unsafe {
            libc::atexit(on_exit);
        }
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

async fn spawn_server() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("bind random port")
        .port();
    let child = Command::new(env!("CARGO_BIN_EXE_calm_companion"))
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/state")).send().await {
            if resp.status().is_success() {
                return base_url;
            }
        }
        assert!(Instant::now() < deadline, "server did not become ready");
        sleep(Duration::from_millis(100)).await;
    }
}

async fn base_url() -> &'static str {
    BASE_URL.get_or_init(spawn_server).await
}

async fn moods(client: &Client, base_url: &str) -> Vec<MoodEntry> {
    client
        .get(format!("{base_url}/api/moods"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_record_mood_prepends_entry() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::new();

    let before = moods(&client, base).await;

    let response = client
        .post(format!("{}/api/moods", base))
        .json(&serde_json::json!({ "mood": "anxious", "note": "  big meeting  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: MoodEntry = response.json().await.unwrap();
    assert_eq!(created.score, 2);
    assert_eq!(created.note.as_deref(), Some("big meeting"));

    let after = moods(&client, base).await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0].mood, "anxious");

    let suggestion: Suggestion = client
        .get(format!("{}/api/suggestion", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(suggestion.title, "Grounding 5-4-3-2-1");
}

#[tokio::test]
async fn http_missing_mood_is_noop_and_unknown_mood_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::new();

    let before = moods(&client, base).await;

    let missing = client
        .post(format!("{}/api/moods", base))
        .json(&serde_json::json!({ "note": "no mood picked" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NO_CONTENT);

    let unknown = client
        .post(format!("{}/api/moods", base))
        .json(&serde_json::json!({ "mood": "furious" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = unknown.json().await.unwrap();
    assert_eq!(body["error"]["code"], 422);

    let after = moods(&client, base).await;
    assert_eq!(after.len(), before.len());
}

#[tokio::test]
async fn http_journal_trims_and_ignores_blank() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::new();

    let blank = client
        .post(format!("{}/api/journal", base))
        .json(&serde_json::json!({ "body": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status(), StatusCode::NO_CONTENT);

    let saved = client
        .post(format!("{}/api/journal", base))
        .json(&serde_json::json!({ "body": "  text  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(saved.status(), StatusCode::CREATED);

    let journal: JournalView = client
        .get(format!("{}/api/journal", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(journal.entries[0].body, "text");
    assert!(!journal.prompt.is_empty());
}

#[tokio::test]
async fn http_trend_and_insights_follow_log() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::new();

    for mood in ["calm", "joy"] {
        let response = client
            .post(format!("{}/api/moods", base))
            .json(&serde_json::json!({ "mood": mood }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let logged = moods(&client, base).await;

    let trend: TrendView = client
        .get(format!("{}/api/trend", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(trend.values.len(), logged.len().min(7));
    assert_eq!(trend.values.last(), Some(&5));
    assert_eq!(trend.polyline.split(' ').count(), trend.values.len());

    let insights: InsightsView = client
        .get(format!("{}/api/insights", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(insights.streak.count, logged.len().min(7));
    assert!(insights.achievements.contains(&"first_log".to_string()));
    assert!(insights.achievements.contains(&"found_calm".to_string()));
}

#[tokio::test]
async fn http_form_flow_redirects_and_renders() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let switched = client
        .post(format!("{}/screen", base))
        .form(&[("screen", "mood")])
        .send()
        .await
        .unwrap();
    assert_eq!(switched.status(), StatusCode::SEE_OTHER);

    let saved = client
        .post(format!("{}/mood", base))
        .form(&[("mood", "sad"), ("note", "rainy <day>")])
        .send()
        .await
        .unwrap();
    assert_eq!(saved.status(), StatusCode::SEE_OTHER);

    let page = client
        .get(format!("{}/", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("How are you feeling?"));
    assert!(page.contains("rainy &lt;day&gt;"));
    assert!(page.contains("Self-kindness note"));

    let bad_screen = client
        .post(format!("{}/screen", base))
        .form(&[("screen", "settings")])
        .send()
        .await
        .unwrap();
    assert_eq!(bad_screen.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

async fn snapshot(client: &Client, base_url: &str) -> serde_json::Value {
    client
        .get(format!("{base_url}/api/state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_malformed_bodies_use_error_envelope() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::new();

    let wrong_type = client
        .post(format!("{base}/api/moods"))
        .json(&serde_json::json!({ "mood": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_type.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = wrong_type.json().await.unwrap();
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"].as_str().unwrap().contains("mood"));

    let not_json = client
        .post(format!("{base}/api/journal"))
        .body("{\"body\": ")
        .header("content-type", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(not_json.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = not_json.json().await.unwrap();
    assert_eq!(body["error"]["code"], 400);

    let missing_field = client
        .post(format!("{base}/screen"))
        .form(&[("view", "mood")])
        .send()
        .await
        .unwrap();
    assert_eq!(missing_field.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = missing_field.json().await.unwrap();
    assert!(body["error"]["message"].as_str().unwrap().contains("screen"));
}

#[tokio::test]
async fn http_goal_toggle_form_adds_then_removes() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let has_goal = |state: &serde_json::Value| {
        state["goals"]
            .as_array()
            .unwrap()
            .iter()
            .any(|goal| goal == "sleep_better")
    };
    let initially = has_goal(&snapshot(&client, base).await);

    for expected in [!initially, initially] {
        let toggled = client
            .post(format!("{base}/goals/toggle"))
            .form(&[("goal", "sleep_better")])
            .send()
            .await
            .unwrap();
        assert_eq!(toggled.status(), StatusCode::SEE_OTHER);
        assert_eq!(has_goal(&snapshot(&client, base).await), expected);
    }

    let unknown = client
        .post(format!("{base}/goals/toggle"))
        .form(&[("goal", "fly")])
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn http_journal_clear_form_drops_draft() {
    let _guard = TEST_LOCK.lock().await;
    let base = base_url().await;
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let before = snapshot(&client, base).await["journal"].as_array().unwrap().len();

    let blank = client
        .post(format!("{base}/journal"))
        .form(&[("body", "   ")])
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status(), StatusCode::SEE_OTHER);
    let state = snapshot(&client, base).await;
    assert_eq!(state["drafts"]["journal"], "   ");
    assert_eq!(state["journal"].as_array().unwrap().len(), before);

    let cleared = client
        .post(format!("{base}/journal/clear"))
        .send()
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::SEE_OTHER);
    assert_eq!(snapshot(&client, base).await["drafts"]["journal"], "");
}
