use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Habit {
    id: u64,
    name: String,
    completed: bool,
    streak: u32,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct HistoryEntry {
    date: String,
    completed: bool,
    #[serde(default)]
    streak: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct DayCell {
    date: String,
    completed: bool,
    intensity: u8,
}

#[derive(Debug, Deserialize)]
struct MonthMarker {
    week: usize,
    month: u32,
}

#[derive(Debug, Deserialize)]
struct HeatmapStats {
    completed_days: usize,
    completion_percentage: u32,
    current_streak: u32,
    longest_streak: u32,
}

#[derive(Debug, Deserialize)]
struct HabitSummary {
    total: usize,
    completed_today: usize,
    active: usize,
    completion_rate: u32,
}

#[derive(Debug, Deserialize)]
struct HeatmapResponse {
    today: String,
    days: Vec<DayCell>,
    months: Vec<MonthMarker>,
    stats: HeatmapStats,
    summary: HabitSummary,
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
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

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
    path.push(format!("habit_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("HABITS_DATA_PATH", data_path)
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

async fn create_habit(client: &Client, base_url: &str, name: &str) -> Habit {
    let response = client
        .post(format!("{base_url}/api/habits"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    response.json().await.unwrap()
}

async fn list_habits(client: &Client, base_url: &str, query: &str) -> Vec<Habit> {
    client
        .get(format!("{base_url}/api/habits{query}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_create_and_list_habit() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "http create test").await;
    assert_eq!(created.name, "http create test");
    assert!(!created.completed);
    assert_eq!(created.streak, 0);
    assert!(created.history.is_empty());

    let habits = list_habits(&client, &server.base_url, "").await;
    assert!(habits.iter().any(|habit| habit.id == created.id));
}

#[tokio::test]
async fn http_create_rejects_blank_name() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_toggle_marks_today_and_undoes() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "http toggle test").await;

    let toggled: Habit = client
        .post(format!("{}/api/habits/{}/toggle", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.streak, 1);
    assert_eq!(toggled.history.len(), 1);
    assert!(toggled.history[0].completed);
    assert_eq!(toggled.history[0].streak, Some(1));
    assert!(!toggled.history[0].date.is_empty());

    let undone: Habit = client
        .post(format!("{}/api/habits/{}/toggle", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!undone.completed);
    assert_eq!(undone.streak, 0);
}

#[tokio::test]
async fn http_toggle_unknown_id_is_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits/999999/toggle", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_delete_removes_habit() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "http delete test").await;

    let response = client
        .delete(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let habits = list_habits(&client, &server.base_url, "").await;
    assert!(habits.iter().all(|habit| habit.id != created.id));

    let again = client
        .delete(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_sort_by_name_orders_results() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let first = create_habit(&client, &server.base_url, "zzz sort test").await;
    let second = create_habit(&client, &server.base_url, "aaa sort test").await;

    let habits = list_habits(&client, &server.base_url, "?sort=name").await;
    let pos_a = habits.iter().position(|h| h.id == second.id).unwrap();
    let pos_z = habits.iter().position(|h| h.id == first.id).unwrap();
    assert!(pos_a < pos_z);
}

#[tokio::test]
async fn http_view_filter_partitions_habits() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "http view test").await;
    client
        .post(format!("{}/api/habits/{}/toggle", server.base_url, created.id))
        .send()
        .await
        .unwrap();

    let completed = list_habits(&client, &server.base_url, "?view=completed").await;
    assert!(completed.iter().any(|habit| habit.id == created.id));
    assert!(completed.iter().all(|habit| habit.completed));

    let active = list_habits(&client, &server.base_url, "?view=active").await;
    assert!(active.iter().all(|habit| !habit.completed));
    assert!(active.iter().all(|habit| habit.id != created.id));
}

#[tokio::test]
async fn http_heatmap_has_full_window() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(&client, &server.base_url, "http heatmap test").await;
    client
        .post(format!("{}/api/habits/{}/toggle", server.base_url, created.id))
        .send()
        .await
        .unwrap();

    let heatmap: HeatmapResponse = client
        .get(format!("{}/api/heatmap", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(heatmap.days.len(), 364);
    let last = heatmap.days.last().unwrap();
    assert_eq!(last.date, heatmap.today);
    assert!(last.completed);
    assert!(last.intensity >= 1);

    assert!(heatmap.stats.completed_days >= 1);
    assert!(heatmap.stats.current_streak >= 1);
    assert!(heatmap.stats.longest_streak >= heatmap.stats.current_streak);
    assert!(heatmap.stats.completion_percentage <= 100);

    assert!((12..=14).contains(&heatmap.months.len()));
    assert!(heatmap.months.iter().all(|marker| marker.month <= 11));
    assert!(heatmap
        .months
        .windows(2)
        .all(|pair| pair[0].week < pair[1].week));

    let habits = list_habits(&client, &server.base_url, "").await;
    assert_eq!(heatmap.summary.total, habits.len());
    assert_eq!(
        heatmap.summary.total,
        heatmap.summary.completed_today + heatmap.summary.active
    );
    assert!(heatmap.summary.completion_rate <= 100);
}
