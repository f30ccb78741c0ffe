//! Owner records: the incident and playbook documents that embed a
//! property list.
//!
//! Only the fields this engine reads are modeled; the server documents
//! carry more (checklists, status posts, reminders) and those are ignored
//! on decode. Every field is defaulted so a sparse or empty response still
//! decodes into a well-formed value with an iterable (possibly empty)
//! property list.

use serde::{Deserialize, Serialize};

use super::list::PropertyList;

/// A running incident with its embedded property list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Incident id.
    #[serde(default)]
    pub id: String,
    /// Incident name, taken from its channel.
    #[serde(default)]
    pub name: String,
    /// Channel backing the incident.
    #[serde(default)]
    pub channel_id: String,
    /// Team owning the channel.
    #[serde(default)]
    pub team_id: String,
    /// Playbook the incident was started from, if any.
    #[serde(default)]
    pub playbook_id: String,
    /// The incident's property list; never null after decode.
    #[serde(default)]
    pub propertylist: PropertyList,
}

/// A playbook template with its embedded property list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playbook {
    /// Playbook id.
    #[serde(default)]
    pub id: String,
    /// Playbook title.
    #[serde(default)]
    pub title: String,
    /// Team the playbook belongs to.
    #[serde(default)]
    pub team_id: String,
    /// Seed property list copied into new incidents.
    #[serde(default)]
    pub propertylist: PropertyList,
}
