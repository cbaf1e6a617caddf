//! Feature and FeatureCollection objects (RFC 7946, sections 3.2 and 3.3).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{GeoJsonError, Result};
use crate::geometry_type::GeoJsonType;

/// Identifier of a feature. Written as either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// String id.
    String(String),
    /// Numeric id.
    Number(Number),
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty)*) => {
        $(
            impl From<$t> for FeatureId {
                fn from(value: $t) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

impl TryFrom<f64> for FeatureId {
    type Error = GeoJsonError;

    fn try_from(value: f64) -> Result<Self> {
        Number::from_f64(value)
            .map(Self::Number)
            .ok_or_else(|| GeoJsonError::InvalidId(value.to_string()))
    }
}

impl From<FeatureId> for Value {
    fn from(value: FeatureId) -> Self {
        match value {
            FeatureId::String(v) => Value::String(v),
            FeatureId::Number(v) => Value::Number(v),
        }
    }
}

/// Converts a serializable value into a properties document.
///
/// ```
/// use geojson_pull::properties;
/// use serde::Serialize;
/// use serde_json::json;
///
/// #[derive(Serialize)]
/// struct Props {
///     name: String,
///     foo: f64,
/// }
///
/// let value = properties(&Props { name: "bar".into(), foo: 4.3 })?;
/// assert_eq!(value, json!({"name": "bar", "foo": 4.3}));
/// # Ok::<(), geojson_pull::GeoJsonError>(())
/// ```
pub fn properties<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Returns a Feature object without an id.
///
/// The produced object has no `id` member at all. A `None` geometry is written as `null`.
pub fn feature(geometry: Option<Value>, properties: Value) -> Value {
    Value::Object(feature_object(geometry, properties))
}

/// Returns a Feature object with the given id.
///
/// ```
/// use geojson_pull::{feature_with_id, point};
/// use serde_json::json;
///
/// let value = feature_with_id(2, Some(point((1.0, 2.0))), json!({}));
/// assert_eq!(value["id"], json!(2));
/// ```
pub fn feature_with_id(
    id: impl Into<FeatureId>,
    geometry: Option<Value>,
    properties: Value,
) -> Value {
    let mut object = feature_object(geometry, properties);
    object.insert("id".to_string(), id.into().into());
    Value::Object(object)
}

/// Returns a FeatureCollection object.
///
/// `accessor` takes the feature index and returns the feature object. It is not called when `count` is 0.
pub fn feature_collection<F>(count: usize, accessor: F) -> Value
where
    F: FnMut(usize) -> Value,
{
    let features = (0..count).map(accessor).collect();

    let mut object = Map::new();
    object.insert(
        "type".to_string(),
        Value::from(GeoJsonType::FeatureCollection.name()),
    );
    object.insert("features".to_string(), Value::Array(features));

    log::debug!("Assembled feature collection with {count} features");
    Value::Object(object)
}

fn feature_object(geometry: Option<Value>, properties: Value) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::from(GeoJsonType::Feature.name()));
    object.insert("geometry".to_string(), geometry.unwrap_or(Value::Null));
    object.insert("properties".to_string(), properties);
    object
}
