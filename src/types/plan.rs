//! Plan records

use serde::{Deserialize, Serialize};

/// A user-defined pricing/description record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Plan fields without an id, as submitted by create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl PlanDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    pub fn into_plan(self, id: impl Into<String>) -> Plan {
        Plan {
            id: id.into(),
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

impl From<&Plan> for PlanDraft {
    fn from(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: plan.price,
        }
    }
}
