use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::cell::RefCell;
use zagros_menu::{PrefsStorage, StorageError};

/// Cookie holding the JSON-serialized preference record. The browser is
/// the only durable home for this state; concurrent tabs race
/// last-writer-wins, which is acceptable for telemetry-grade data.
pub const PREFS_COOKIE: &str = "zagros_prefs";

const PREFS_TTL_DAYS: i64 = 365;

/// One-request [`PrefsStorage`] over the preference cookie: reads the
/// value that arrived with the request, buffers at most one write, and
/// hands it back to the handler for the `Set-Cookie` response header.
pub struct CookieStorage {
    incoming: Option<String>,
    outgoing: RefCell<Option<String>>,
}

impl CookieStorage {
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self {
            incoming: jar.get(PREFS_COOKIE).map(|cookie| cookie.value().to_owned()),
            outgoing: RefCell::new(None),
        }
    }

    /// The buffered write, if any, as a ready-to-add cookie.
    pub fn take_update(self) -> Option<Cookie<'static>> {
        self.outgoing.into_inner().map(|payload| {
            Cookie::build((PREFS_COOKIE, payload))
                .path("/")
                .max_age(time::Duration::days(PREFS_TTL_DAYS))
                .same_site(SameSite::Lax)
                .build()
        })
    }
}

impl PrefsStorage for CookieStorage {
    fn get(&self) -> Result<Option<String>, StorageError> {
        // Read-after-write within the same request sees the new value.
        if let Some(pending) = self.outgoing.borrow().clone() {
            return Ok(Some(pending));
        }
        Ok(self.incoming.clone())
    }

    fn set(&self, value: &str) -> Result<(), StorageError> {
        *self.outgoing.borrow_mut() = Some(value.to_owned());
        Ok(())
    }
}
