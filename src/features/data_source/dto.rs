use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const DEPUTY_NOT_FOUND_MESSAGE: &str = "Deputado não encontrado";

/// Shape of `deputados_detalhes.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeputyDetailsDocument {
    /// Any truthy value marks the document usable.
    #[serde(default)]
    pub ok: Value,
    #[serde(default)]
    pub deputados_detalhes: Map<String, Value>,
}

impl DeputyDetailsDocument {
    /// Only object records count as found.
    pub fn lookup(&self, name: &str) -> Option<&Map<String, Value>> {
        if !is_truthy(&self.ok) {
            return None;
        }

        self.deputados_detalhes.get(name).and_then(Value::as_object)
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn unmapped_sentinel() -> Value {
    json!({ "ok": false })
}

pub fn deputy_not_found() -> Value {
    json!({ "ok": false, "mensagem": DEPUTY_NOT_FOUND_MESSAGE })
}

/// Builds `{ok: true, ...record}`; fields of the record override `ok`.
pub fn merge_found_record(record: &Map<String, Value>) -> Value {
    let mut merged = Map::new();
    merged.insert("ok".to_string(), Value::Bool(true));

    for (key, value) in record {
        merged.insert(key.clone(), value.clone());
    }

    Value::Object(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> DeputyDetailsDocument {
        serde_json::from_value(json!({
            "ok": true,
            "deputados_detalhes": {
                "Ana Silva": {"partido": "PS", "presencas": 40},
                "Vazio": null
            }
        }))
        .unwrap()
    }

    #[test]
    fn lookup_ignores_null_entries() {
        let document = document();
        assert!(document.lookup("Ana Silva").is_some());
        assert!(document.lookup("Vazio").is_none());
        assert!(document.lookup("Outro").is_none());
    }

    #[test]
    fn lookup_ignores_scalar_records() {
        let document: DeputyDetailsDocument = serde_json::from_value(json!({
            "ok": true,
            "deputados_detalhes": {"Falso": false, "Zero": 0, "Texto": "abc", "Lista": [1]}
        }))
        .unwrap();

        for name in ["Falso", "Zero", "Texto", "Lista"] {
            assert!(document.lookup(name).is_none(), "{name} should not be found");
        }
    }

    #[test]
    fn non_boolean_ok_is_read_by_truthiness() {
        let mut document = document();
        document.ok = json!(1);
        assert!(document.lookup("Ana Silva").is_some());

        document.ok = json!(0);
        assert!(document.lookup("Ana Silva").is_none());

        document.ok = Value::Null;
        assert!(document.lookup("Ana Silva").is_none());
    }

    #[test]
    fn truthiness_follows_falsy_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(2), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn lookup_requires_ok_document() {
        let mut document = document();
        document.ok = Value::Bool(false);
        assert!(document.lookup("Ana Silva").is_none());
    }

    #[test]
    fn merged_record_fields_override_ok() {
        let record = json!({"ok": false, "partido": "PSD"});
        let merged = merge_found_record(record.as_object().unwrap());
        assert_eq!(merged, json!({"ok": false, "partido": "PSD"}));

        let record = json!({"partido": "PSD"});
        let merged = merge_found_record(record.as_object().unwrap());
        assert_eq!(merged, json!({"ok": true, "partido": "PSD"}));
    }
}
