//! Listing and editing UI preferences from the command line.
//!
//! `show` reads every catalogued name the way an export would (stored value,
//! else the export default), so what is printed is exactly what `export`
//! would translate.  `set` validates a single edit against the catalogue
//! before it reaches the store.

use prefbridge_core::{PrefValue, PreferenceCatalog, PreferenceError, PreferenceStore};
use serde_json::{Map, Value};
use tracing::debug;

/// One `name = value` line per catalogued preference, in catalogue order.
pub fn render_text<P>(catalog: &PreferenceCatalog, prefs: &P) -> String
where
    P: PreferenceStore + ?Sized,
{
    let entries = catalog.read_all(prefs);
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, value) in entries {
        out.push_str(&format!("{name:<width$} = {value}\n"));
    }
    out
}

/// A JSON object mapping each catalogued name to its bool or string value.
pub fn render_json<P>(catalog: &PreferenceCatalog, prefs: &P) -> Value
where
    P: PreferenceStore + ?Sized,
{
    let map: Map<String, Value> = catalog
        .read_all(prefs)
        .into_iter()
        .map(|(name, value)| {
            let json = match value {
                PrefValue::Bool(b) => Value::Bool(b),
                PrefValue::Text(s) => Value::String(s),
            };
            (name.to_string(), json)
        })
        .collect();
    Value::Object(map)
}

/// Parses `raw` for `name` and writes it to `prefs`.
///
/// Returns the catalogue spelling of the name and the value written.
///
/// # Errors
///
/// Returns [`PreferenceError`] if the name is not catalogued or the value
/// does not fit its type.  Nothing is written in that case.
pub fn apply_edit<P>(
    catalog: &PreferenceCatalog,
    prefs: &mut P,
    name: &str,
    raw: &str,
) -> Result<(&'static str, PrefValue), PreferenceError>
where
    P: PreferenceStore + ?Sized,
{
    let (name, value) = catalog.parse_value(name, raw)?;
    match &value {
        PrefValue::Bool(b) => prefs.set_bool(name, *b),
        PrefValue::Text(s) => prefs.set_string(name, s),
    }
    debug!(pref = name, %value, "preference edited");
    Ok((name, value))
}
