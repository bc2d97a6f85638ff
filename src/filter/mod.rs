use crate::records::UserRecord;

/// Drops every record whose first name equals the exclusion value. Matching
/// is exact and case-sensitive; relative order is preserved. The production
/// configuration supplies an empty value, which matches no real record; the
/// stage stays in place as an extension point for callers that do want to
/// exclude a name.
pub fn filter_by_first_name(
    records: Vec<UserRecord>,
    excluded_first_name: &str,
) -> Vec<UserRecord> {
    records
        .into_iter()
        .filter(|record| record.first_name != excluded_first_name)
        .collect()
}
