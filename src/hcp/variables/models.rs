//! Workspace variable data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Variable category
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    /// Terraform input variable
    Terraform,
    /// Environment variable of the run
    Env,
}

impl std::fmt::Display for VariableCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableCategory::Terraform => write!(f, "terraform"),
            VariableCategory::Env => write!(f, "env"),
        }
    }
}

/// Workspace variable from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
///
/// `value` is always `None` for sensitive variables: the API never returns it.
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,

    pub value: Option<String>,

    pub description: Option<String>,

    pub category: VariableCategory,

    #[serde(default)]
    pub hcl: bool,

    #[serde(default)]
    pub sensitive: bool,
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}

/// Attributes sent when creating a variable
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VariableDraft {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: VariableCategory,
    pub hcl: bool,
    pub sensitive: bool,
}

impl VariableDraft {
    /// Build the destination copy of a source variable
    ///
    /// Sensitive variables become placeholders with an empty value.
    pub fn copy_of(source: &Variable) -> Self {
        let attrs = &source.attributes;
        let value = if attrs.sensitive {
            String::new()
        } else {
            attrs.value.clone().unwrap_or_default()
        };
        Self {
            key: attrs.key.clone(),
            value,
            description: attrs.description.clone(),
            category: attrs.category,
            hcl: attrs.hcl,
            sensitive: attrs.sensitive,
        }
    }

    /// JSON:API request body for `POST /workspaces/:id/vars`
    pub fn to_request_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": self
            }
        })
    }
}
