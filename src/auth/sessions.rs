// src/auth/sessions.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

pub const SESSION_COOKIE: &str = "patio_session";
const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days
const TOKEN_BYTES: usize = 32;

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

struct Session {
    usuario: String,
    expires_at: i64,
}

/// In-memory session store keyed by the SHA-256 of the cookie token.
/// Only the hash is kept; the raw token lives solely in the cookie.
/// Sessions do not survive a restart, which is fine for this tool.
pub struct SessionStore {
    inner: Mutex<HashMap<[u8; 32], Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Create a session and return the raw URL-safe token for the cookie.
    pub fn create(&self, usuario: &str, now: i64) -> String {
        let mut raw = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut raw);
        let raw_token = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw);

        let session = Session {
            usuario: usuario.to_string(),
            expires_at: now + SESSION_TTL_SECS,
        };
        self.lock().insert(hash_token(&raw_token), session);

        raw_token
    }

    /// Resolve a cookie token to the signed-in user, if still valid.
    pub fn lookup(&self, raw_token: &str, now: i64) -> Option<String> {
        let map = self.lock();
        map.get(&hash_token(raw_token))
            .filter(|s| s.expires_at > now)
            .map(|s| s.usuario.clone())
    }

    pub fn revoke(&self, raw_token: &str) {
        self.lock().remove(&hash_token(raw_token));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<[u8; 32], Session>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}
