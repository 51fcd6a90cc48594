//! Key stripping for the storage boundary.

use serde_json::Value;

/// Prepare a raw or normalized payload for persistence.
///
/// Drops associative keys from `columns`, `rows` and each row's cells,
/// preserving input order, and removes the derived `table` attribute.
/// Everything else passes through untouched; final on-disk encoding
/// stays with the host.
pub fn serialize_value(mut value: Value) -> Value {
    let Value::Object(map) = &mut value else {
        return value;
    };

    map.remove("table");

    if let Some(rows) = map.get_mut("rows") {
        densify(rows);
        if let Value::Array(items) = rows {
            for row in items {
                densify(row);
            }
        }
    }
    if let Some(columns) = map.get_mut("columns") {
        densify(columns);
    }

    value
}

/// Replaces an associative map with its values, in input order.
fn densify(value: &mut Value) {
    if let Value::Object(map) = value {
        let items = std::mem::take(map).into_values().collect();
        *value = Value::Array(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn associative_keys_are_dropped_in_order() {
        let stored = serialize_value(json!({
            "columns": {"col0": {"heading": "A"}, "col1": {"heading": "B"}},
            "rows": {"row0": {"col0": "1", "col1": "2"}, "row1": {"col0": "3"}},
        }));
        assert_eq!(
            stored,
            json!({
                "columns": [{"heading": "A"}, {"heading": "B"}],
                "rows": [["1", "2"], ["3"]],
            })
        );
    }

    #[test]
    fn dense_input_is_untouched() {
        let input = json!({
            "columns": [{"heading": "A"}],
            "rows": [["1"]],
        });
        assert_eq!(serialize_value(input.clone()), input);
    }

    #[test]
    fn derived_table_attribute_is_removed() {
        let stored = serialize_value(json!({
            "columns": [],
            "rows": [],
            "table": "<table></table>",
        }));
        assert!(stored.get("table").is_none());
    }

    #[test]
    fn absent_fields_pass_through() {
        assert_eq!(serialize_value(json!({})), json!({}));
        assert_eq!(serialize_value(json!("opaque")), json!("opaque"));
    }
}
