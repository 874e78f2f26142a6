pub mod employee;
pub mod record;

pub use employee::Employee;
pub use record::ClockRecord;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's zero value, like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
