use crate::types::Coordinate;

pub(crate) fn urljoin(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Appends an identifier to an endpoint path as one percent-encoded segment.
pub(crate) fn path_with_id(path: &str, id: &str) -> String {
    format!("{}/{}", path.trim_end_matches('/'), urlencoding::encode(id))
}

/// Comma-joined, shortest round-trippable decimals (`-122.5`, `10`, `0.000001`).
pub(crate) fn format_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn format_coordinate(c: &Coordinate) -> String {
    format_floats(&[c.longitude, c.latitude])
}

/// Search-along-route encoding: `lon,lat;lon,lat` with six fixed decimals.
pub(crate) fn encode_route(route: &[Coordinate]) -> String {
    route
        .iter()
        .map(|c| format!("{:.6},{:.6}", c.longitude, c.latitude))
        .collect::<Vec<_>>()
        .join(";")
}

pub(crate) fn redact_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_urls() {
        assert_eq!(
            urljoin("https://api.mapbox.com/", "/search/geocode/v6/forward"),
            "https://api.mapbox.com/search/geocode/v6/forward"
        );
        assert_eq!(urljoin("http://127.0.0.1:1234", "a/b"), "http://127.0.0.1:1234/a/b");
    }

    #[test]
    fn encodes_path_ids() {
        assert_eq!(
            path_with_id("/search/searchbox/v1/category", "coffee_shop"),
            "/search/searchbox/v1/category/coffee_shop"
        );
        assert_eq!(
            path_with_id("/search/searchbox/v1/retrieve", "a/b c"),
            "/search/searchbox/v1/retrieve/a%2Fb%20c"
        );
    }

    #[test]
    fn formats_floats_shortest() {
        assert_eq!(
            format_floats(&[-122.5, 37.7, -122.3, 37.8]),
            "-122.5,37.7,-122.3,37.8"
        );
        assert_eq!(format_floats(&[10.0, -0.000001]), "10,-0.000001");
        assert_eq!(format_coordinate(&Coordinate::new(12.496365, 41.902916)), "12.496365,41.902916");
    }

    #[test]
    fn encodes_route_fixed_precision() {
        let route = [Coordinate::new(-122.4, 37.8), Coordinate::new(-122.5, 37.7)];
        assert_eq!(
            encode_route(&route),
            "-122.400000,37.800000;-122.500000,37.700000"
        );
        assert_eq!(encode_route(&[]), "");
    }

    #[test]
    fn redacts_tokens() {
        assert_eq!(redact_token("pk.abcdefghijklmnop"), "pk.a...mnop");
        assert_eq!(redact_token("short"), "****");
        assert_eq!(redact_token("12345678"), "****");
    }
}
