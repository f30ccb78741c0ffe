//! Ordered property lists and their mutation operations.
//!
//! Every operation is a pure transformation: the receiver is never modified
//! and a full replacement value is returned. Lists are small (tens of
//! items), so replacement is a plain copy with no structural sharing.

use serde::{Deserialize, Serialize};

use super::property::{PropertyDefinition, PropertyPayload};
use super::selection::SelectedIds;

/// Errors raised by list operations.
///
/// Out-of-range indices and unknown property ids indicate caller bugs, not
/// user-facing conditions; they are surfaced loudly and never retried.
#[derive(Debug, thiserror::Error)]
pub enum PropertyListError {
    /// Index outside the current item range.
    #[error("index {index} out of range for list of {len} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Item count at the time of the call.
        len: usize,
    },

    /// A title that is empty after trimming.
    #[error("property title must not be blank")]
    BlankTitle,

    /// No property with the given id exists in the list.
    #[error("no property with id {0:?} in list")]
    UnknownProperty(String),

    /// The addressed property has the wrong payload kind for the operation.
    #[error("property {0:?} does not have a {1} payload")]
    WrongPayload(String, &'static str),
}

/// Result type for list operations.
pub type PropertyListResult<T> = Result<T, PropertyListError>;

/// Outcome of a reorder request.
///
/// `reorder(i, i)` short-circuits to [`Reorder::Unchanged`] so callers can
/// skip both re-rendering and the outbound network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reorder {
    /// Source and destination were equal; no new list was produced.
    Unchanged,
    /// The element was moved; the replacement list.
    Moved(PropertyList),
}

impl Reorder {
    /// Returns the moved list, if the reorder produced one.
    #[must_use]
    pub fn into_moved(self) -> Option<PropertyList> {
        match self {
            Self::Unchanged => None,
            Self::Moved(list) => Some(list),
        }
    }
}

/// An ordered collection of property definitions.
///
/// Order is display order and is user-controlled; it carries no other
/// meaning. The owning incident or playbook holds the list exclusively,
/// and every mutation yields a fresh value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyList {
    /// List id assigned by the server; empty for unsaved lists.
    #[serde(default)]
    pub id: String,
    /// Display title of the list.
    #[serde(default)]
    pub title: String,
    /// Properties in display order.
    #[serde(default)]
    pub items: Vec<PropertyDefinition>,
}

impl PropertyList {
    /// Creates an empty list with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Number of properties in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds a property by id.
    #[must_use]
    pub fn item_by_id(&self, property_id: &str) -> Option<&PropertyDefinition> {
        self.items.iter().find(|item| item.id == property_id)
    }

    /// Position of a property by id.
    #[must_use]
    pub fn index_of(&self, property_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == property_id)
    }

    /// Appends `item` and returns the new list.
    ///
    /// Existing items keep their positions; the new item lands at the last
    /// index. Titles are trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyListError::BlankTitle`] if the trimmed title is
    /// empty, mirroring the server-side guard.
    pub fn add(&self, item: PropertyDefinition) -> PropertyListResult<Self> {
        let item = trimmed(item)?;
        let mut next = self.clone();
        next.items.push(item);
        Ok(next)
    }

    /// Replaces the item at `index` wholesale and returns the new list.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyListError::IndexOutOfRange`] for a bad index or
    /// [`PropertyListError::BlankTitle`] for a blank title.
    pub fn edit(&self, index: usize, item: PropertyDefinition) -> PropertyListResult<Self> {
        self.check_index(index)?;
        let item = trimmed(item)?;
        let mut next = self.clone();
        next.items[index] = item;
        Ok(next)
    }

    /// Deletes the item at `index`; subsequent items shift left.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyListError::IndexOutOfRange`] for a bad index.
    pub fn remove(&self, index: usize) -> PropertyListResult<Self> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.items.remove(index);
        Ok(next)
    }

    /// Moves the item at `from` to position `to`.
    ///
    /// Semantics are splice-out then splice-in: the element is removed and
    /// reinserted at the target position computed *after* removal. This is
    /// a move, never a swap. `from == to` short-circuits to
    /// [`Reorder::Unchanged`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyListError::IndexOutOfRange`] if either index is
    /// outside the current item range.
    pub fn reorder(&self, from: usize, to: usize) -> PropertyListResult<Reorder> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(Reorder::Unchanged);
        }
        let mut next = self.clone();
        let item = next.items.remove(from);
        next.items.insert(to, item);
        Ok(Reorder::Moved(next))
    }

    /// Replaces the selected ids of the selection property with id
    /// `property_id` and returns the new list.
    ///
    /// The whole set is overwritten, never merged.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyListError::UnknownProperty`] if no property has
    /// that id, or [`PropertyListError::WrongPayload`] if the property is
    /// not selection-typed.
    pub fn set_selected(&self, property_id: &str, selected: SelectedIds) -> PropertyListResult<Self> {
        let index = self
            .index_of(property_id)
            .ok_or_else(|| PropertyListError::UnknownProperty(property_id.to_owned()))?;
        let mut next = self.clone();
        match &mut next.items[index].payload {
            PropertyPayload::Selection(list) => list.selected = selected,
            PropertyPayload::Freetext(_) => {
                return Err(PropertyListError::WrongPayload(
                    property_id.to_owned(),
                    "selection",
                ));
            }
        }
        Ok(next)
    }

    /// Replaces the text value of the freetext property with id
    /// `property_id` and returns the new list.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyListError::UnknownProperty`] if no property has
    /// that id, or [`PropertyListError::WrongPayload`] if the property is
    /// not freetext-typed.
    pub fn set_freetext(&self, property_id: &str, value: impl Into<String>) -> PropertyListResult<Self> {
        let index = self
            .index_of(property_id)
            .ok_or_else(|| PropertyListError::UnknownProperty(property_id.to_owned()))?;
        let mut next = self.clone();
        match &mut next.items[index].payload {
            PropertyPayload::Freetext(text) => text.value = value.into(),
            PropertyPayload::Selection(_) => {
                return Err(PropertyListError::WrongPayload(
                    property_id.to_owned(),
                    "freetext",
                ));
            }
        }
        Ok(next)
    }

    fn check_index(&self, index: usize) -> PropertyListResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(PropertyListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

fn trimmed(mut item: PropertyDefinition) -> PropertyListResult<PropertyDefinition> {
    let title = item.title.trim();
    if title.is_empty() {
        return Err(PropertyListError::BlankTitle);
    }
    if title.len() != item.title.len() {
        item.title = title.to_owned();
    }
    Ok(item)
}
