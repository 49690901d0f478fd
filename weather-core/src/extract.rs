//! Absent-tolerant reads over nested JSON.
//!
//! Paths are JSON pointers (`/weather/0/icon`). A missing section anywhere
//! along the path, a JSON `null`, or a leaf of the wrong type all read as
//! `None`.

use serde_json::Value;

/// Get-or-absent accessors over a JSON document.
pub trait Extract {
    fn at(&self, path: &str) -> Option<&Value>;

    fn f64_at(&self, path: &str) -> Option<f64> {
        self.at(path).and_then(Value::as_f64)
    }

    /// Integral numbers only; `70.5` is absent rather than truncated.
    fn i64_at(&self, path: &str) -> Option<i64> {
        let value = self.at(path)?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    fn str_at(&self, path: &str) -> Option<String> {
        self.at(path).and_then(Value::as_str).map(str::to_owned)
    }

    /// Whether the path resolves to a non-null value.
    fn has(&self, path: &str) -> bool {
        self.at(path).is_some()
    }
}

impl Extract for Value {
    fn at(&self, path: &str) -> Option<&Value> {
        self.pointer(path).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_nested_leaves() {
        let doc = json!({
            "main": { "temp": 15.2, "humidity": 70 },
            "weather": [{ "description": "clear sky" }],
        });

        assert_eq!(doc.f64_at("/main/temp"), Some(15.2));
        assert_eq!(doc.i64_at("/main/humidity"), Some(70));
        assert_eq!(doc.str_at("/weather/0/description").as_deref(), Some("clear sky"));
    }

    #[test]
    fn missing_sections_are_absent() {
        let doc = json!({ "main": {} });

        assert_eq!(doc.f64_at("/main/temp"), None);
        assert_eq!(doc.f64_at("/wind/speed"), None);
        assert_eq!(doc.str_at("/sys/country"), None);
        assert_eq!(doc.str_at("/weather/0/icon"), None);
    }

    #[test]
    fn null_and_mistyped_leaves_are_absent() {
        let doc = json!({ "name": null, "dt": "yesterday", "clouds": { "all": 40.5 } });

        assert!(!doc.has("/name"));
        assert_eq!(doc.i64_at("/dt"), None);
        assert_eq!(doc.i64_at("/clouds/all"), None);
        assert_eq!(doc.f64_at("/clouds/all"), Some(40.5));
    }

    #[test]
    fn whole_float_reads_as_integer() {
        let doc = json!({ "wind": { "deg": 200.0 } });

        assert_eq!(doc.i64_at("/wind/deg"), Some(200));
    }
}
