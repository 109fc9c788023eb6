use crate::core::error::{Result, TalentDeckError};
use std::path::PathBuf;

/// Directory holding persisted decision stores.
///
/// `XDG_DATA_HOME` wins when set (also how tests isolate state), otherwise the
/// platform data directory from `dirs`.
pub fn get_store_directory() -> Result<PathBuf> {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::data_dir)
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
        .ok_or(TalentDeckError::StoreDirectoryNotFound)?;

    Ok(base.join("talent-deck"))
}

/// Directory holding the listing snapshot cache.
///
/// Same resolution scheme as [`get_store_directory`], keyed off `XDG_CACHE_HOME`.
pub fn get_cache_directory() -> Result<PathBuf> {
    let base = std::env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::cache_dir)
        .or_else(|| dirs::home_dir().map(|h| h.join(".cache")))
        .ok_or(TalentDeckError::StoreDirectoryNotFound)?;

    Ok(base.join("talent-deck"))
}
