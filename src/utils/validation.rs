//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos que llegan desde los formularios.

use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::ValidationError;

lazy_static! {
    /// Teléfono: dígitos, espacios, guiones, paréntesis y '+', entre 7 y 20 caracteres
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9+()\- ]{7,20}$").unwrap();
}

/// Validar y convertir string a fecha de calendario.
///
/// Acepta `YYYY-MM-DD` y también un timestamp RFC 3339, del que solo se
/// conserva la parte de fecha.
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            let mut error = ValidationError::new("date");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DD".to_string());
            error
        })
}

/// Interpretar un valor JSON "tipo entero" como entero positivo.
///
/// Los formularios envían tanto números como strings (`2`, `"2"`); los
/// decimales con parte fraccionaria, los negativos y el cero se rechazan.
pub fn parse_positive_int(value: &Value) -> Option<i32> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;

    if parsed >= 1 {
        i32::try_from(parsed).ok()
    } else {
        None
    }
}

/// Comparación de texto sin distinguir mayúsculas
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `deserialize_with` que recorta espacios antes de validar longitudes
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Igual que `trimmed` para campos opcionales
pub fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()))
}

/// Valor de fecha tal como llega en el JSON.
///
/// `None` si falta o está en blanco; `Some(Err(()))` si no es una fecha válida
/// (incluidos números u otros tipos no textuales).
pub fn date_value(value: Option<&Value>) -> Option<Result<NaiveDate, ()>> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(validate_date(s).map_err(|_| ())),
        _ => Some(Err(())),
    }
}
