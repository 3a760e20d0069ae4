use tirescan_types::TireSpec;

/// Shop search URL for a tire size: `{base}/{width}/{aspect_ratio}/{diameter}/`.
///
/// Segments are inserted verbatim. A trailing slash on `base` is dropped so the
/// result never contains `//`.
pub fn search_link(base: &str, spec: &TireSpec) -> String {
    format!(
        "{}/{}/{}/{}/",
        base.trim_end_matches('/'),
        spec.width(),
        spec.aspect_ratio(),
        spec.diameter()
    )
}
