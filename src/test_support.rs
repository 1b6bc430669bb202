//! In-memory killboard and manual clock for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::batch::Clock;
use crate::killboard::Killboard;

type PostHook = Box<dyn Fn(&str, &str) + Send + Sync>;

/// A transport fault without touching the network: a request to an unparsable URL.
pub fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("http://[::1")
        .build()
        .expect_err("an unparsable URL cannot build a request")
}

/// Killboard serving canned pages and recording every request.
///
/// Posts succeed by default: the response echoes the scout's name.
#[derive(Default)]
pub struct MemoryKillboard {
    pages: HashMap<String, String>,
    failing_pages: HashSet<String>,
    post_bodies: HashMap<String, String>,
    failing_posts: HashSet<String>,
    post_hook: Option<PostHook>,
    fetched: Mutex<Vec<String>>,
    posts: Mutex<Vec<(String, String, String)>>,
}

impl MemoryKillboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_failing_page(mut self, url: &str) -> Self {
        self.failing_pages.insert(url.to_string());
        self
    }

    pub fn with_post_response(mut self, url: &str, body: &str) -> Self {
        self.post_bodies.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_failing_post(mut self, url: &str) -> Self {
        self.failing_posts.insert(url.to_string());
        self
    }

    /// Runs `hook(url, scout)` after every post.
    pub fn with_post_hook(mut self, hook: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        self.post_hook = Some(Box::new(hook));
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<(String, String, String)> {
        self.posts.lock().unwrap().clone()
    }

    /// Killmail URLs posted to, one entry per post.
    pub fn posted_records(&self) -> Vec<String> {
        self.posts().into_iter().map(|(url, _, _)| url).collect()
    }
}

impl Killboard for MemoryKillboard {
    async fn fetch_page(&self, url: &str) -> Result<String, reqwest::Error> {
        self.fetched.lock().unwrap().push(url.to_string());
        if self.failing_pages.contains(url) {
            return Err(transport_error());
        }
        Ok(self.pages.get(url).cloned().unwrap_or_default())
    }

    async fn post_scout(
        &self,
        url: &str,
        scout: &str,
        password: &str,
    ) -> Result<String, reqwest::Error> {
        self.posts.lock().unwrap().push((
            url.to_string(),
            scout.to_string(),
            password.to_string(),
        ));
        if let Some(hook) = &self.post_hook {
            hook(url, scout);
        }
        if self.failing_posts.contains(url) {
            return Err(transport_error());
        }
        Ok(self
            .post_bodies
            .get(url)
            .cloned()
            .unwrap_or_else(|| format!("<html><td>{}</td></html>", scout)))
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}

impl Clock for Arc<ManualClock> {
    fn now(&self) -> Instant {
        self.as_ref().now()
    }
}
