//! Record Status
//!
//! Active/archived flag carried by snippets.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Archived,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Archived => "archived",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Archived,
            Status::Archived => Status::Active,
        }
    }

    pub fn is_archived(&self) -> bool {
        matches!(self, Status::Archived)
    }
}

/// Anything other than "archived" (missing, null, empty, legacy "inactive")
/// loads as active.
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("archived") => Status::Archived,
            _ => Status::Active,
        })
    }
}

/// `null` becomes the default value; pair with `#[serde(default)]` for missing fields
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
