//! Shared type definitions
//!
//! Flat records persisted by the store and exchanged with the providers.

pub mod message;
pub mod model;
pub mod plan;
pub mod response;
pub mod template;

pub use message::{ChatMessage, Role};
pub use model::{ModelInfo, ModelPricing};
pub use plan::{Plan, PlanDraft};
pub use response::SavedResponse;
pub use template::PromptTemplate;
