use faq_core::enums::{SortDirection, SortField, SortOption};
use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Build the list ordering from `--sort`, `--asc`, and `--desc`.
///
/// Without `--sort` the collection order is kept. A sort field defaults to
/// descending.
pub fn parse_sort(sort: Option<&str>, asc: bool) -> anyhow::Result<Option<SortOption>> {
    let Some(raw) = sort else {
        return Ok(None);
    };
    let field: SortField = parse_enum(raw, "sort field")?;
    let direction = if asc {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };
    Ok(Some(SortOption::new(field, direction)))
}
