//! Selection option sets for selection-typed properties.
//!
//! A selection property carries an ordered list of options and the set of
//! currently chosen option ids. The host platform serializes the chosen set
//! as a single comma-joined string; in memory it is kept as an explicit
//! ordered set ([`SelectedIds`]) and the comma encoding exists only at the
//! serde boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Separator used by the wire encoding of a selected id set.
///
/// Option ids must never contain this character; constructors enforce it.
pub const ID_SEPARATOR: char = ',';

/// Errors raised while building a selection option set.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// An option id contains the wire separator character.
    #[error("option id {0:?} contains the reserved separator ','")]
    ReservedSeparator(String),

    /// Two options in the same list share an id.
    #[error("duplicate option id {0:?} in selection list")]
    DuplicateId(String),
}

/// Result type for selection list construction.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Presentational colors for rendering an option as a badge.
///
/// Carries no behavior; the rendering layer owns its interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStyle {
    /// Background color of the badge.
    #[serde(default)]
    pub badge_color: String,
    /// Text color of the badge.
    #[serde(default)]
    pub text_color: String,
}

/// One option in a selection list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    /// Option id, unique within its list.
    #[serde(default)]
    pub id: String,
    /// Display value of the option.
    #[serde(default)]
    pub value: String,
    /// Optional badge colors for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_style: Option<BadgeStyle>,
}

impl SelectionItem {
    /// Creates an option with a generated id.
    ///
    /// Generated ids are UUIDs and therefore never contain the wire
    /// separator, so items built this way always satisfy the id invariant.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value: value.into(),
            badge_style: None,
        }
    }

    /// Creates an option with an explicit id.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::ReservedSeparator`] if the id contains `,`.
    pub fn with_id(id: impl Into<String>, value: impl Into<String>) -> SelectionResult<Self> {
        let id = id.into();
        if id.contains(ID_SEPARATOR) {
            return Err(SelectionError::ReservedSeparator(id));
        }
        Ok(Self {
            id,
            value: value.into(),
            badge_style: None,
        })
    }
}

/// The ordered set of chosen option ids.
///
/// Order is significant: resolution output follows this order, not the
/// order of the option list. Duplicates are collapsed to the first
/// occurrence. Serializes as the comma-joined wire string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedIds(Vec<String>);

impl SelectedIds {
    /// Creates an empty selected set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a set holding a single id.
    ///
    /// Input containing the separator is treated as already-joined
    /// fragments and split, exactly like [`SelectedIds::from_wire`], so no
    /// stored id ever contains `,` and the wire encoding stays lossless.
    #[must_use]
    pub fn single(id: impl Into<String>) -> Self {
        Self::from_wire(&id.into())
    }

    /// Parses the comma-joined wire encoding.
    ///
    /// Empty fragments are dropped, so `""` parses as an empty set and
    /// stray separators (`"1,,2"`) are tolerated. Duplicate ids keep their
    /// first position.
    #[must_use]
    pub fn from_wire(encoded: &str) -> Self {
        let mut set = Self::new();
        set.extend_from(encoded);
        set
    }

    fn extend_from(&mut self, raw: &str) {
        for fragment in raw.split(ID_SEPARATOR) {
            if fragment.is_empty() || self.contains(fragment) {
                continue;
            }
            self.0.push(fragment.to_owned());
        }
    }

    /// Encodes the set as the comma-joined wire string.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.0.join(",")
    }

    /// Returns true if no id is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns true if the set contains the given id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|held| held == id)
    }
}

impl FromIterator<String> for SelectedIds {
    /// Collects ids, splitting any that contain the separator the same way
    /// [`SelectedIds::from_wire`] does.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.extend_from(&id);
        }
        set
    }
}

impl Serialize for SelectedIds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for SelectedIds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&encoded))
    }
}

/// An ordered option set for one selection-typed property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionList {
    /// Options in display order.
    #[serde(default)]
    pub items: Vec<SelectionItem>,
    /// Whether more than one option may be chosen at once.
    #[serde(default)]
    pub is_multiselect: bool,
    /// Chosen option ids, in selection order.
    #[serde(default, rename = "selected_id")]
    pub selected: SelectedIds,
}

impl SelectionList {
    /// Builds a selection list from explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::ReservedSeparator`] if any option id
    /// contains `,`, or [`SelectionError::DuplicateId`] if two options
    /// share an id.
    pub fn new(items: Vec<SelectionItem>, is_multiselect: bool) -> SelectionResult<Self> {
        for (idx, item) in items.iter().enumerate() {
            if item.id.contains(ID_SEPARATOR) {
                return Err(SelectionError::ReservedSeparator(item.id.clone()));
            }
            if items[..idx].iter().any(|prior| prior.id == item.id) {
                return Err(SelectionError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self {
            items,
            is_multiselect,
            selected: SelectedIds::new(),
        })
    }

    /// Appends a new option with a generated id and returns the new list.
    #[must_use]
    pub fn push_item(&self, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.items.push(SelectionItem::new(value));
        next
    }

    /// Looks up an option by exact id match.
    #[must_use]
    pub fn item_by_id(&self, id: &str) -> Option<&SelectionItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
