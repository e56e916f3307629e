// src/record.rs
//
// The scraping collaborator returns JSON objects whose key sets vary by
// source site and request options. Records are kept in that shape; the
// normalizer projects them onto a tabular view (see core/normalize.rs).

use serde_json::{Map, Value};

/// One job posting as returned by the scraping collaborator.
pub type JobRecord = Map<String, Value>;

/// Union of keys present across the record set.
/// Order is irrelevant to callers; the normalizer orders columns by the
/// caller's desired list, not by this union.
pub fn schema_keys(records: &[JobRecord]) -> std::collections::HashSet<&str> {
    let mut keys = std::collections::HashSet::new();
    for r in records {
        for k in r.keys() {
            keys.insert(k.as_str());
        }
    }
    keys
}

/// Render a JSON value as display/export text.
/// Null → empty cell; scalars via their natural text; nested values as
/// compact JSON so nothing is silently lost.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Field lookup rendered as text; missing key → empty string.
pub fn field_text<'a>(record: &'a JobRecord, key: &str) -> Option<&'a str> {
    match record.get(key) {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> JobRecord {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn schema_keys_is_union_over_all_records() {
        let records = vec![
            rec(json!({"title": "QA", "company": "Acme"})),
            rec(json!({"title": "Dev", "location": "Pune"})),
        ];
        let keys = schema_keys(&records);
        assert!(keys.contains("title"));
        assert!(keys.contains("company"));
        assert!(keys.contains("location"));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn cell_text_renders_scalars_and_null() {
        assert_eq!(cell_text(&json!("x")), "x");
        assert_eq!(cell_text(&json!(3)), "3");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}
