use crate::region::AreaCode;

/// Compose the forecast document URL for an area: `<base>/<code>.json`.
pub fn build_endpoint(base_url: &str, code: AreaCode) -> String {
    format!("{}/{}.json", base_url.trim_end_matches('/'), code.as_str())
}
