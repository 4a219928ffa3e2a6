//! Read-back of the most recent poems.

use crate::error::ProviderResult;
use crate::provider::PoemReader;
use crate::types::PoemRecord;

/// Number of poems shown on the board.
pub const RECENT_WINDOW: u64 = 9;

/// Indices of the newest poems, newest first.
///
/// Yields `total - 1` down to `total - RECENT_WINDOW`, stopping at zero.
pub fn recent_indices(total: u64) -> impl Iterator<Item = u64> {
    (total.saturating_sub(RECENT_WINDOW)..total).rev()
}

/// Fetches up to [`RECENT_WINDOW`] of the newest poems, newest first.
///
/// Any failed call fails the whole load so callers never see a partial list.
pub async fn load_recent(reader: &dyn PoemReader) -> ProviderResult<Vec<PoemRecord>> {
    let total = reader.total_poems().await?;
    if total == 0 {
        tracing::debug!("No poems on chain");
        return Ok(Vec::new());
    }

    let mut poems = Vec::with_capacity(total.min(RECENT_WINDOW) as usize);
    for index in recent_indices(total) {
        let raw = reader.poem(index).await?;
        poems.push(PoemRecord::from_raw(raw));
    }

    tracing::debug!(total, loaded = poems.len(), "Loaded recent poems");
    Ok(poems)
}
