//! Form fields, raw user input, and the numeric feature payload.
//!
//! The nine inputs are a closed set: [`FieldId`] names them, [`FormState`]
//! stores the raw text for each, and [`FeatureVector`] is the parsed payload
//! keyed by the short codes the prediction service expects.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of meteorological inputs collected by the form.
pub const FIELD_COUNT: usize = 9;

/// Largest integer a JSON consumer can hold exactly in a double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One of the nine fixed form inputs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    AirTemperature,
    RelativeHumidity,
    WindSpeed,
    Rainfall,
    Ffmc,
    Dmc,
    Dc,
    Isi,
    Bui,
}

impl FieldId {
    /// Every field in display order.
    pub const ALL: [FieldId; FIELD_COUNT] = [
        Self::AirTemperature,
        Self::RelativeHumidity,
        Self::WindSpeed,
        Self::Rainfall,
        Self::Ffmc,
        Self::Dmc,
        Self::Dc,
        Self::Isi,
        Self::Bui,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::AirTemperature => "Air Temperature (°C)",
            Self::RelativeHumidity => "Relative Humidity (%)",
            Self::WindSpeed => "Wind Speed (km/h)",
            Self::Rainfall => "Rainfall (mm)",
            Self::Ffmc => "Fine Fuel Moisture Code (FFMC)",
            Self::Dmc => "Duff Moisture Code (DMC)",
            Self::Dc => "Drought Code (DC)",
            Self::Isi => "Initial Spread Index (ISI)",
            Self::Bui => "Build Up Index (BUI)",
        }
    }

    /// Key used for this field in the request payload.
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::AirTemperature => "Temperature",
            Self::RelativeHumidity => "RH",
            Self::WindSpeed => "Ws",
            Self::Rainfall => "Rain",
            Self::Ffmc => "FFMC",
            Self::Dmc => "DMC",
            Self::Dc => "DC",
            Self::Isi => "ISI",
            Self::Bui => "BUI",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Raw, unvalidated text for each of the nine inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; FIELD_COUNT],
}

impl FormState {
    /// All-empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of one field, untrimmed.
    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Replace the raw text of a single field.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Iterate fields with their raw text, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// True when no field is blank; mirrors a `required` attribute on every input.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|value| !value.trim().is_empty())
    }

    /// Parse every field into the numeric payload sent to the service.
    pub fn to_features(&self) -> FeatureVector {
        let mut values = [0.0; FIELD_COUNT];
        for field in FieldId::ALL {
            values[field.index()] = parse_feature(self.get(field));
        }
        FeatureVector { values }
    }
}

/// Parse a raw field value as a decimal number, yielding NaN when it is not one.
///
/// Parsing ignores locale: only `.` is a decimal separator.
pub fn parse_feature(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parsed feature values keyed by wire code.
///
/// Serializes as a JSON object in display order. Integral values are written
/// without a fraction and non-finite values are written as `null`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    values: [f64; FIELD_COUNT],
}

impl FeatureVector {
    /// Parsed value of one field; NaN when its text was not a number.
    pub fn get(&self, field: FieldId) -> f64 {
        self.values[field.index()]
    }

    /// Iterate fields with their parsed values, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, f64)> + '_ {
        FieldId::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Fields whose raw text did not parse to a finite number.
    pub fn non_finite_fields(&self) -> Vec<FieldId> {
        self.iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(field, _)| field)
            .collect()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.wire_key(), &WireNumber(value))?;
        }
        map.end()
    }
}

struct WireNumber(f64);

impl Serialize for WireNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if !value.is_finite() {
            serializer.serialize_none()
        } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}
