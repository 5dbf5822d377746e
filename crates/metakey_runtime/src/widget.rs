//! Widget descriptions and raw-value validation.
//!
//! The property-editing UI renders one widget per key kind. This module
//! describes which widget to render and validates raw annotation strings
//! against a key's declared constraints before the UI commits them. It
//! never draws anything.

use metakey_foundation::{Error, KeyType, MetaValue, Result};
use metakey_registry::MetaDataKey;

/// The editing widget to render for a key.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    /// Present-or-absent checkbox (flags) or true/false checkbox (bools).
    Toggle,
    /// Free-form text entry.
    TextEntry,
    /// Integer entry with bounds and an optional slider range.
    IntEntry {
        /// Minimum accepted value.
        min: i64,
        /// Maximum accepted value.
        max: i64,
        /// Slider range, absent when sliders are disallowed.
        slider: Option<(i64, i64)>,
    },
    /// Float entry with bounds and an optional slider range.
    FloatEntry {
        /// Minimum accepted value.
        min: f64,
        /// Maximum accepted value.
        max: f64,
        /// Slider range, absent when sliders are disallowed.
        slider: Option<(f64, f64)>,
    },
    /// Gameplay-tag picker.
    TagPicker {
        /// Whether the picker selects multiple tags.
        container: bool,
    },
    /// Dropdown over the key's declared value list.
    Dropdown {
        /// The selectable options.
        options: Vec<String>,
    },
}

/// Returns the widget to render for a key definition.
#[must_use]
pub fn widget_for(key: &MetaDataKey) -> WidgetKind {
    match key.key_type {
        KeyType::Flag | KeyType::Bool => WidgetKind::Toggle,
        KeyType::String => WidgetKind::TextEntry,
        KeyType::Integer => WidgetKind::IntEntry {
            min: key.min_int,
            max: key.max_int,
            slider: key
                .allow_slider
                .then_some((key.min_slider_int, key.max_slider_int)),
        },
        KeyType::Float => WidgetKind::FloatEntry {
            min: key.min_float,
            max: key.max_float,
            slider: key
                .allow_slider
                .then_some((key.min_slider_float, key.max_slider_float)),
        },
        KeyType::GameplayTag => WidgetKind::TagPicker { container: false },
        KeyType::GameplayTagContainer => WidgetKind::TagPicker { container: true },
        KeyType::ValueList => WidgetKind::Dropdown {
            options: key.value_list.clone(),
        },
    }
}

/// Validates a raw annotation string against a key's constraints.
///
/// Parses the raw string for the key's kind, then enforces numeric bounds
/// and value-list membership.
///
/// # Errors
/// Returns [`ErrorKind::InvalidValue`] when the string does not parse and
/// [`ErrorKind::ValueOutOfBounds`] when a declared constraint rejects it.
///
/// [`ErrorKind::InvalidValue`]: metakey_foundation::ErrorKind::InvalidValue
/// [`ErrorKind::ValueOutOfBounds`]: metakey_foundation::ErrorKind::ValueOutOfBounds
pub fn validate_raw(key: &MetaDataKey, raw: &str) -> Result<MetaValue> {
    let value = MetaValue::parse(key.key_type, raw)?;

    match &value {
        MetaValue::Int(n) => {
            if *n < key.min_int || *n > key.max_int {
                return Err(Error::value_out_of_bounds(
                    &key.name,
                    format!("{n} is outside [{}, {}]", key.min_int, key.max_int),
                ));
            }
        }
        MetaValue::Float(x) => {
            if *x < key.min_float || *x > key.max_float {
                return Err(Error::value_out_of_bounds(
                    &key.name,
                    format!("{x} is outside [{}, {}]", key.min_float, key.max_float),
                ));
            }
        }
        MetaValue::ListEntry(entry) => {
            if !key.value_list.iter().any(|v| v == entry) {
                return Err(Error::value_out_of_bounds(
                    &key.name,
                    format!("{entry:?} is not in the value list"),
                ));
            }
        }
        _ => {}
    }

    Ok(value)
}
