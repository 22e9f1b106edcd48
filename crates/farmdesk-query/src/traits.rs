//! The [`Record`] trait for types with named fields.

use crate::value::Value;

/// A row that exposes its fields by name.
///
/// Implementing this trait gives a type a ready-made accessor for the engine.
/// Plain functions with the same shape work just as well.
///
/// ```
/// use farmdesk_query::{ListEngine, ListQuery, Record, Value};
///
/// struct Farm {
///     name: String,
///     owner: String,
/// }
///
/// impl Record for Farm {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Text(&self.name),
///             "owner" => Value::Text(&self.owner),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let farms = vec![
///     Farm { name: "Green Valley Farm".into(), owner: "Ahmed Khalil".into() },
///     Farm { name: "Sunrise Farms".into(), owner: "Sara Mansouri".into() },
/// ];
///
/// let engine = ListEngine::new().search_fields(["name", "owner"]);
/// let page = engine
///     .query(&farms, &ListQuery::new().search("sara"), Farm::accessor)
///     .unwrap();
/// assert_eq!(page.items[0].name, "Sunrise Farms");
/// ```
pub trait Record {
    /// Returns the value of a field, or [`Value::None`] for unknown fields.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function suitable for the engine's query methods.
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}
