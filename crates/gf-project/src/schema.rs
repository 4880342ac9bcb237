//! Network definition schema: the plain topology handed over by the editor.

use serde::{Deserialize, Serialize};

use crate::ProjectResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    #[serde(default, alias = "nodes")]
    pub components: Vec<ComponentDef>,
    #[serde(default, alias = "edges")]
    pub wires: Vec<WireDef>,
}

impl NetworkDef {
    pub fn from_json_str(content: &str) -> ProjectResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> ProjectResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn component(&self, id: &str) -> Option<&ComponentDef> {
        self.components.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub id: String,
    /// `powerSource`, `switch`, `bus`, `load` or `transformer`; missing
    /// means bus.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub position: PositionDef,
    #[serde(default)]
    pub data: ComponentDataDef,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PositionDef {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Operating fields. Anything else the editor stores (labels, live
/// readings) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDataDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_current: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireDef {
    pub id: String,
    /// Source component id.
    pub source: String,
    /// Target component id.
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<WireDataDef>,
}

impl WireDef {
    pub fn voltage_override(&self) -> Option<f64> {
        self.data.as_ref().and_then(|d| d.voltage)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WireDataDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
}
