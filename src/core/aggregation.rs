use crate::domain::model::UpstreamEmployeeRecord;

pub const TOP_EARNERS_LIMIT: usize = 10;

/// Zero for an empty snapshot.
pub fn highest_salary(snapshot: &[UpstreamEmployeeRecord]) -> i64 {
    snapshot.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best paid employees, highest first. Equal salaries
/// keep their snapshot order.
pub fn top_earner_names(snapshot: &[UpstreamEmployeeRecord], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&UpstreamEmployeeRecord> = snapshot.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}

pub fn search_by_name<'a>(
    snapshot: &'a [UpstreamEmployeeRecord],
    fragment: &str,
) -> Vec<&'a UpstreamEmployeeRecord> {
    let needle = fragment.to_lowercase();
    snapshot
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}
