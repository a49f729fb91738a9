/// Rewrites a backend media reference (image or PDF) into an absolute URL
/// the browser can load.
///
/// The backend stores paths like `/media/pdfs/x.pdf` and, in older rows,
/// absolute URLs minted against its own dev origin (`localhost:8000`). Both
/// get rebased onto the configured API base; anything else passes through.
/// Blank references and a bare `/` mean "no file".
pub(crate) fn normalize_backend_url(url: &str, base_url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == "/" {
        return None;
    }

    for dev_origin in ["http://localhost:8000", "https://localhost:8000"] {
        if let Some(rest) = trimmed.strip_prefix(dev_origin) {
            return Some(format!("{}{}", base_url, rest));
        }
    }

    if trimmed.starts_with(base_url) {
        return Some(trimmed.to_string());
    }

    if trimmed.starts_with('/') {
        return Some(format!("{}{}", base_url, trimmed));
    }

    Some(trimmed.to_string())
}

/// `2025-01-15T10:30:00Z` -> `2025/01/15` for list rows. Timestamps the
/// backend emits are ISO-8601; anything shorter is shown as-is.
pub(crate) fn format_date_ymd(iso: &str) -> String {
    let date = iso.trim();
    if let Some(head) = date.get(..10) {
        let b = head.as_bytes();
        if b[4] == b'-' && b[7] == b'-' {
            return head.replace('-', "/");
        }
    }
    date.to_string()
}

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// "Updated …" label for list rows. Future timestamps (clock skew against
/// the backend) read as just-now.
pub(crate) fn format_relative_time(then_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(then_ms).max(0);

    if diff < MINUTE_MS {
        return "たった今".to_string();
    }
    if diff < HOUR_MS {
        return format!("{}分前", diff / MINUTE_MS);
    }
    if diff < DAY_MS {
        return format!("{}時間前", diff / HOUR_MS);
    }
    if diff < 7 * DAY_MS {
        return format!("{}日前", diff / DAY_MS);
    }
    if diff < 30 * DAY_MS {
        return format!("{}週間前", diff / (7 * DAY_MS));
    }
    if diff < 365 * DAY_MS {
        return format!("{}ヶ月前", diff / (30 * DAY_MS));
    }
    format!("{}年前", diff / (365 * DAY_MS))
}

/// Relative label straight from an ISO timestamp (browser clock as "now").
pub(crate) fn relative_time_label(iso: &str) -> String {
    let then = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso)).get_time();
    if then.is_nan() {
        return "-".to_string();
    }
    format_relative_time(then.round() as i64, js_sys::Date::now().round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://api.example.com";

    #[test]
    fn test_normalize_relative_media_path() {
        assert_eq!(
            normalize_backend_url("/media/x.pdf", BASE).as_deref(),
            Some("http://api.example.com/media/x.pdf")
        );
    }

    #[test]
    fn test_normalize_rewrites_dev_origin() {
        assert_eq!(
            normalize_backend_url("http://localhost:8000/x", BASE).as_deref(),
            Some("http://api.example.com/x")
        );
        assert_eq!(
            normalize_backend_url("https://localhost:8000/media/a.png", BASE).as_deref(),
            Some("http://api.example.com/media/a.png")
        );
    }

    #[test]
    fn test_normalize_blank_and_root_are_none() {
        assert_eq!(normalize_backend_url("", BASE), None);
        assert_eq!(normalize_backend_url("   ", BASE), None);
        assert_eq!(normalize_backend_url("/", BASE), None);
    }

    #[test]
    fn test_normalize_passes_through_base_and_foreign_urls() {
        assert_eq!(
            normalize_backend_url("http://api.example.com/media/y.pdf", BASE).as_deref(),
            Some("http://api.example.com/media/y.pdf")
        );
        assert_eq!(
            normalize_backend_url("https://cdn.example.net/z.png", BASE).as_deref(),
            Some("https://cdn.example.net/z.png")
        );
    }

    #[test]
    fn test_normalize_when_base_is_the_dev_origin() {
        assert_eq!(
            normalize_backend_url("http://localhost:8000/media/x.pdf", "http://localhost:8000")
                .as_deref(),
            Some("http://localhost:8000/media/x.pdf")
        );
    }

    #[test]
    fn test_format_date_ymd() {
        assert_eq!(format_date_ymd("2025-01-15T10:30:00Z"), "2025/01/15");
        assert_eq!(format_date_ymd("2025-01-15"), "2025/01/15");
        assert_eq!(format_date_ymd(""), "");
        assert_eq!(format_date_ymd("yesterday"), "yesterday");
    }

    #[test]
    fn test_relative_time_ladder() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(now - 30 * 1000, now), "たった今");
        assert_eq!(format_relative_time(now - 5 * MINUTE_MS, now), "5分前");
        assert_eq!(format_relative_time(now - 3 * HOUR_MS, now), "3時間前");
        assert_eq!(format_relative_time(now - 2 * DAY_MS, now), "2日前");
        assert_eq!(format_relative_time(now - 10 * DAY_MS, now), "1週間前");
        assert_eq!(format_relative_time(now - 70 * DAY_MS, now), "2ヶ月前");
        assert_eq!(format_relative_time(now - 400 * DAY_MS, now), "1年前");
    }

    #[test]
    fn test_relative_time_future_reads_as_now() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(now + 90 * 1000, now), "たった今");
    }

    #[test]
    fn test_relative_time_unit_boundaries() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(now - MINUTE_MS, now), "1分前");
        assert_eq!(format_relative_time(now - HOUR_MS, now), "1時間前");
        assert_eq!(format_relative_time(now - DAY_MS, now), "1日前");
    }
}
