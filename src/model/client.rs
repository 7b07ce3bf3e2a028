//! Client records.

use super::{Kind, Meta, Patch, Record};
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "active".to_string()
}

/// A client relationship.
///
/// Status is a free-form string (`active` by default) rather than an
/// enum: the dashboard treats it as a label, not a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub meta: Meta,

    pub name: String,

    #[serde(default = "default_status")]
    pub status: String,
}

impl Client {
    #[must_use]
    pub fn from_draft(draft: ClientDraft) -> Self {
        Self {
            meta: Meta::default(),
            name: draft.name,
            status: draft.status.unwrap_or_else(default_status),
        }
    }
}

impl Record for Client {
    const KIND: Kind = Kind::Clients;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }
}

/// Caller input for client creation.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Merge patch for client updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Patch<Client> for ClientPatch {
    fn apply(&self, target: &mut Client) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(status) = &self.status {
            target.status = status.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults_to_active() {
        let client = Client::from_draft(ClientDraft {
            name: "Acme".to_string(),
            status: None,
        });
        assert_eq!(client.status, "active");
    }

    #[test]
    fn test_patch_preserves_name() {
        let mut client = Client::from_draft(ClientDraft {
            name: "Acme".to_string(),
            status: None,
        });
        ClientPatch {
            status: Some("paused".to_string()),
            ..ClientPatch::default()
        }
        .apply(&mut client);

        assert_eq!(client.name, "Acme");
        assert_eq!(client.status, "paused");
    }
}
