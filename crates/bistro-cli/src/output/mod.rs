use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `value` under a single `key`, e.g. `{"employee": {...}}`.
pub fn output_wrapped<T: Serialize>(
    key: &str,
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    output(&wrap(key, value)?, format)
}

fn wrap<T: Serialize>(key: &str, value: &T) -> anyhow::Result<Value> {
    let mut envelope = Map::with_capacity(1);
    envelope.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(envelope))
}
