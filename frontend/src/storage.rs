//! Browser-side persistence: the `user` session, the `jwt` token and the
//! location hash.

use crate::error::SessionError;
use crate::models::Session;

const SESSION_KEY: &str = "user";
const TOKEN_KEY: &str = "jwt";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn read_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// `Ok(None)` means nobody is signed in. A value that does not parse is
/// reported as an error instead of being treated as signed out.
pub fn load_session() -> Result<Option<Session>, SessionError> {
    let storage = local_storage().ok_or(SessionError::StorageUnavailable)?;
    match storage.get_item(SESSION_KEY) {
        Ok(Some(raw)) => Session::parse(&raw).map(Some),
        Ok(None) => Ok(None),
        Err(_) => Err(SessionError::StorageUnavailable),
    }
}

pub fn load_token() -> Option<String> {
    read_item(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_hash(hash).is_err() {
            log::warn!("could not update location hash to {hash:?}");
        }
    }
}
