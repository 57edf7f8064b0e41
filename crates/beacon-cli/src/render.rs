use beacon_core::RankedRecord;
use beacon_view::{DirectoryStatus, ViewState};

/// One line per school: initial, name, county, and distance when known.
pub(crate) fn render_list(list: &[RankedRecord], limit: usize) -> String {
    let mut lines: Vec<String> = list.iter().take(limit).map(render_entry).collect();
    if list.len() > limit {
        lines.push(format!("... {} more", list.len() - limit));
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn render_entry(entry: &RankedRecord) -> String {
    let initial = entry.name().chars().next().unwrap_or(' ');
    let county = if entry.record.county.is_empty() {
        String::new()
    } else {
        format!(" | {}", entry.record.county)
    };
    let distance = entry
        .distance
        .map(|d| format!(" ({d:.3})"))
        .unwrap_or_default();
    format!("[{initial}] {}{county}{distance}", entry.name())
}

/// Header line describing the view, followed by the visible list.
pub(crate) fn render_frame(state: &ViewState, limit: usize) -> String {
    let status = match state.directory_status() {
        DirectoryStatus::Idle | DirectoryStatus::Loading => "loading".to_string(),
        DirectoryStatus::Loaded => format!("{} schools", state.dataset_len()),
        DirectoryStatus::Failed(message) => format!("unavailable: {message}"),
    };
    let mut out = format!(
        "-- query: {:?} | location: {} | directory: {status} | showing {}\n",
        state.query(),
        state.location(),
        state.visible_list().len(),
    );
    out.push_str(&render_list(state.visible_list(), limit));
    out
}
