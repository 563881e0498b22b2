use crate::filters::search::search;
use crate::models::search::{SearchCategory, SearchResponse};
use crate::state::AppState;

#[cfg(feature = "app")]
#[tauri::command]
pub async fn search_records(
    query: String,
    category: SearchCategory,
    state: tauri::State<'_, AppState>,
) -> Result<SearchResponse, String> {
    search_records_internal(state.inner(), query, category).await
}

/// Runs one search behind the simulated latency.
///
/// Each call takes a fresh generation. A call that is no longer the latest
/// once its delay elapses comes back with `superseded` set and no results,
/// so the UI only ever shows the newest query's matches.
pub async fn search_records_internal(
    state: &AppState,
    query: String,
    category: SearchCategory,
) -> Result<SearchResponse, String> {
    let generation = state.begin_search();

    // Blank input clears the list right away.
    if query.trim().is_empty() {
        return Ok(SearchResponse {
            query,
            category,
            generation,
            superseded: false,
            results: Vec::new(),
        });
    }

    if !state.config.search_delay.is_zero() {
        tokio::time::sleep(state.config.search_delay).await;
    }

    if !state.is_latest_search(generation) {
        log::debug!("Search #{generation} for {query:?} superseded");
        return Ok(SearchResponse {
            query,
            category,
            generation,
            superseded: true,
            results: Vec::new(),
        });
    }

    let records = state.records.list_records();
    let results = search(&records, &query, &category);
    log::debug!(
        "Search #{generation} for {query:?} in '{}' matched {} of {} records",
        category.key(),
        results.len(),
        records.len()
    );

    Ok(SearchResponse {
        query,
        category,
        generation,
        superseded: false,
        results,
    })
}
