use crate::geo::LatLon;

/// Shortest segment that can hold a coordinate token.
const MIN_SEGMENT_LEN: usize = 11;

/// Pulls a vertex chain such as `5152N00049E - 5200N00100E - 5152N00049E`
/// out of free text.
///
/// Segments between hyphens that don't start with a coordinate token are
/// skipped. Returns `None` rather than an empty list when nothing parsed.
pub fn extract_polygon(text: &str) -> Option<Vec<LatLon>> {
    let points: Vec<_> = text
        .split('-')
        .map(str::trim)
        .filter(|segment| segment.chars().count() >= MIN_SEGMENT_LEN)
        .filter_map(|segment| segment.split_whitespace().next())
        .filter_map(LatLon::from_notam)
        .collect();

    if points.is_empty() {
        None
    } else {
        Some(points)
    }
}
