//! Property definitions: one named, typed custom field on an incident or
//! playbook.
//!
//! The host platform's wire record carries a `type` tag plus *two* optional
//! payload fields (`freetext` and `selection`), of which only the one named
//! by the tag is meaningful. In memory the payload is a tagged union, so the
//! "inactive field must be ignored" rule holds by construction; the dual
//! optional-field shape survives only inside the serde codec.

use serde::{Deserialize, Serialize};

use super::selection::SelectionList;

/// Discriminant for the two property kinds.
///
/// The wire values are capitalized (`"Freetext"`, `"Selection"`), matching
/// the host platform's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyType {
    /// Free-form text value.
    #[default]
    Freetext,
    /// Value chosen from a fixed option set.
    Selection,
}

/// Payload of a freetext property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    /// The current text value.
    #[serde(default)]
    pub value: String,
}

impl TextValue {
    /// Creates a text payload.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Type-specific payload of a property definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyPayload {
    /// Free-form text.
    Freetext(TextValue),
    /// Option set plus chosen ids.
    Selection(SelectionList),
}

impl Default for PropertyPayload {
    fn default() -> Self {
        Self::Freetext(TextValue::default())
    }
}

impl PropertyPayload {
    /// The type tag matching this payload.
    #[must_use]
    pub const fn property_type(&self) -> PropertyType {
        match self {
            Self::Freetext(_) => PropertyType::Freetext,
            Self::Selection(_) => PropertyType::Selection,
        }
    }
}

/// A single named, typed property attached to an incident or playbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireProperty", into = "WireProperty")]
pub struct PropertyDefinition {
    /// Opaque identifier; empty until first persisted, after which the
    /// server-assigned id is canonical.
    pub id: String,
    /// Display name. List operations reject blank titles.
    pub title: String,
    /// Descriptive flag; enforcement belongs to the form-validation layer.
    pub is_mandatory: bool,
    /// Type-specific payload.
    pub payload: PropertyPayload,
}

impl PropertyDefinition {
    /// Creates an unpersisted freetext property.
    #[must_use]
    pub fn new_freetext(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            is_mandatory: false,
            payload: PropertyPayload::Freetext(TextValue::default()),
        }
    }

    /// Creates an unpersisted selection property.
    #[must_use]
    pub fn new_selection(title: impl Into<String>, selection: SelectionList) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            is_mandatory: false,
            payload: PropertyPayload::Selection(selection),
        }
    }

    /// The type tag of this property.
    #[must_use]
    pub const fn property_type(&self) -> PropertyType {
        self.payload.property_type()
    }

    /// Returns true once the server has assigned an id.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// The selection payload, if this is a selection property.
    #[must_use]
    pub const fn as_selection(&self) -> Option<&SelectionList> {
        match &self.payload {
            PropertyPayload::Selection(list) => Some(list),
            PropertyPayload::Freetext(_) => None,
        }
    }

    /// The freetext payload, if this is a freetext property.
    #[must_use]
    pub const fn as_freetext(&self) -> Option<&TextValue> {
        match &self.payload {
            PropertyPayload::Freetext(text) => Some(text),
            PropertyPayload::Selection(_) => None,
        }
    }
}

/// The host platform's record shape: a type tag plus both optional payload
/// fields. Only used by the serde codec.
#[derive(Serialize, Deserialize)]
struct WireProperty {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "type", default)]
    kind: PropertyType,
    #[serde(default)]
    is_mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selection: Option<SelectionList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    freetext: Option<TextValue>,
}

impl From<WireProperty> for PropertyDefinition {
    fn from(wire: WireProperty) -> Self {
        // The field named by the tag wins; the other is dropped here so it
        // can never be read downstream.
        let payload = match wire.kind {
            PropertyType::Freetext => PropertyPayload::Freetext(wire.freetext.unwrap_or_default()),
            PropertyType::Selection => {
                PropertyPayload::Selection(wire.selection.unwrap_or_default())
            }
        };
        Self {
            id: wire.id,
            title: wire.title,
            is_mandatory: wire.is_mandatory,
            payload,
        }
    }
}

impl From<PropertyDefinition> for WireProperty {
    fn from(def: PropertyDefinition) -> Self {
        let kind = def.property_type();
        let (freetext, selection) = match def.payload {
            PropertyPayload::Freetext(text) => (Some(text), None),
            PropertyPayload::Selection(list) => (None, Some(list)),
        };
        Self {
            id: def.id,
            title: def.title,
            kind,
            is_mandatory: def.is_mandatory,
            selection,
            freetext,
        }
    }
}
