use serde_json::Value;

/// A single user row projected out of the raw API collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserRecord {
    /// Projects one raw collection element. A missing key, a null value or a
    /// non-object element yields an empty field, never an error; scalar
    /// non-string values keep their display form.
    pub fn from_value(value: &Value) -> Self {
        Self {
            email: field_string(value, "email"),
            first_name: field_string(value, "first_name"),
            last_name: field_string(value, "last_name"),
        }
    }
}

fn field_string(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
