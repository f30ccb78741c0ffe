//! Core data structures for the property list engine.
//!
//! - [`property`] - typed property definitions and the wire codec
//! - [`selection`] - option sets and the ordered selected-id set
//! - [`list`] - the ordered property list and its pure mutation operations
//! - [`draft`] - staged title editing
//! - [`incident`] - the owner documents that embed a property list

pub mod draft;
pub mod incident;
pub mod list;
pub mod property;
pub mod selection;

pub use draft::TitleDraft;
pub use incident::{Incident, Playbook};
pub use list::{PropertyList, PropertyListError, PropertyListResult, Reorder};
pub use property::{PropertyDefinition, PropertyPayload, PropertyType, TextValue};
pub use selection::{
    BadgeStyle, ID_SEPARATOR, SelectedIds, SelectionError, SelectionItem, SelectionList,
    SelectionResult,
};
