use serde::Serialize;
use serde_json::Value;
use stance_core::MuscleFinding;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Table options from the terminal preferences.
pub fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// `role | muscle | rationale` rows, overactive first.
pub fn findings_rows(overactive: &[MuscleFinding], underactive: &[MuscleFinding]) -> Vec<Vec<String>> {
    overactive
        .iter()
        .chain(underactive)
        .map(|f| {
            vec![
                f.role.as_str().to_string(),
                f.muscle.clone(),
                f.rationale.clone(),
            ]
        })
        .collect()
}

fn render_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

/// Objects become one row each; columns are the union of keys, sorted.
fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options)
}

/// Scalars print bare, arrays of scalars join with ", ", anything else as JSON.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(|item| !item.is_array() && !item.is_object()) => {
            items.iter().map(value_to_cell).collect::<Vec<_>>().join(", ")
        }
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        indicators: Vec<&'static str>,
        minimum: u32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "upper-crossed",
                indicators: vec!["forward-head", "rounded-shoulders"],
                minimum: 2,
            },
            Row {
                id: "pronation-distortion",
                indicators: vec!["feet-flatten"],
                minimum: 1,
            },
        ]
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&rows(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["id"], "upper-crossed");
        assert_eq!(parsed[1]["minimum"], 1);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&rows(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn table_render_sorts_columns() {
        let out = render(&rows(), OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let id = header.find("id").expect("id column");
        let indicators = header.find("indicators").expect("indicators column");
        let minimum = header.find("minimum").expect("minimum column");
        assert!(id < indicators && indicators < minimum);
        assert!(out.contains("forward-head, rounded-shoulders"));
    }

    #[test]
    fn empty_array_has_placeholder() {
        let empty: Vec<Row> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn nested_objects_fall_back_to_json() {
        let value = serde_json::json!({ "area": "Core" });
        assert_eq!(value_to_cell(&value), r#"{"area":"Core"}"#);
        assert_eq!(value_to_cell(&serde_json::Value::Null), "-");
    }
}
