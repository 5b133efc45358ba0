// Pick ledger: how often each champion has been accepted.

use tracing::info;

use crate::error::StoreError;
use crate::store::IniStore;

/// Store section holding `lowercase name = count` entries.
pub const STATS_SECTION: &str = "Stats";

/// Increment the acceptance count for `champion` and flush the store.
/// Returns the new count.
pub fn record_pick(store: &mut IniStore, champion: &str) -> Result<u32, StoreError> {
    let key = champion.to_lowercase();
    let count = match store.get(STATS_SECTION, &key) {
        Some(raw) => parse_count(&key, raw)? + 1,
        None => 1,
    };
    store.set(STATS_SECTION, &key, count.to_string());
    store.save()?;
    info!(champion = %key, count, "pick recorded");
    Ok(count)
}

/// All ledger entries in store order, or `None` if nothing was ever recorded.
pub fn entries(store: &IniStore) -> Result<Option<Vec<(String, u32)>>, StoreError> {
    let Some(section) = store.section(STATS_SECTION) else {
        return Ok(None);
    };
    section
        .iter()
        .map(|(key, raw)| parse_count(key, raw).map(|count| (key.clone(), count)))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// The stats view shown to the player.
pub fn render(store: &IniStore) -> Result<String, StoreError> {
    Ok(match entries(store)? {
        None => "No stats available in the moment!".to_string(),
        Some(list) => list
            .iter()
            .map(|(name, count)| format!("{} - {}", capitalize(name), count))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

fn parse_count(key: &str, raw: &str) -> Result<u32, StoreError> {
    raw.trim().parse().map_err(|_| StoreError::BadCount {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
