//! Plan storage
//!
//! CRUD over the plan list kept under a single store key.

use crate::storage::store::{read_json, write_json, KeyValueStore};
use crate::storage::StorageError;
use crate::types::{Plan, PlanDraft};
use std::sync::Arc;

/// Store key for the plan list
pub const STORAGE_KEY: &str = "application_plans";

#[derive(Clone)]
pub struct PlanService {
    store: Arc<dyn KeyValueStore>,
}

impl PlanService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All plans, in insertion order
    ///
    /// An unreadable or corrupt list is logged and treated as empty.
    pub fn get_plans(&self) -> Vec<Plan> {
        match read_json::<Vec<Plan>>(self.store.as_ref(), STORAGE_KEY) {
            Ok(plans) => plans.unwrap_or_default(),
            Err(e) => {
                tracing::error!("Failed to load plans: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_plans(&self, plans: &[Plan]) -> Result<(), StorageError> {
        write_json(self.store.as_ref(), STORAGE_KEY, plans).map_err(|e| {
            tracing::error!("Failed to save plans: {}", e);
            e
        })
    }

    pub fn create_plan(&self, draft: PlanDraft) -> Result<Plan, StorageError> {
        Self::ensure_valid(&draft)?;

        let mut plans = self.get_plans();
        let plan = draft.into_plan(uuid::Uuid::new_v4().simple().to_string());
        plans.push(plan.clone());
        self.save_plans(&plans)?;

        tracing::info!("Created plan {} ({})", plan.id, plan.name);
        Ok(plan)
    }

    /// Replace a plan's fields, keeping its id and position
    pub fn update_plan(&self, id: &str, draft: PlanDraft) -> Result<Plan, StorageError> {
        Self::ensure_valid(&draft)?;

        let mut plans = self.get_plans();
        let slot = plans
            .iter_mut()
            .find(|plan| plan.id == id)
            .ok_or_else(|| not_found(id))?;

        *slot = draft.into_plan(id);
        let updated = slot.clone();
        self.save_plans(&plans)?;

        tracing::info!("Updated plan {}", id);
        Ok(updated)
    }

    pub fn delete_plan(&self, id: &str) -> Result<(), StorageError> {
        let plans = self.get_plans();
        let before = plans.len();
        let remaining: Vec<Plan> = plans.into_iter().filter(|plan| plan.id != id).collect();

        if remaining.len() == before {
            return Err(not_found(id));
        }

        self.save_plans(&remaining)?;
        tracing::info!("Deleted plan {}", id);
        Ok(())
    }

    pub fn get_plan_by_id(&self, id: &str) -> Option<Plan> {
        self.get_plans().into_iter().find(|plan| plan.id == id)
    }

    pub fn validate_plan_id(plan_id: &str) -> bool {
        !plan_id.trim().is_empty()
    }

    /// Messages for every missing required field; empty when valid
    pub fn validate_plan_data(name: &str, description: &str) -> Vec<String> {
        let mut errors = Vec::new();

        if name.trim().is_empty() {
            errors.push("Plan name is required".to_string());
        }

        if description.trim().is_empty() {
            errors.push("Plan description is required".to_string());
        }

        errors
    }

    fn ensure_valid(draft: &PlanDraft) -> Result<(), StorageError> {
        let errors = Self::validate_plan_data(&draft.name, &draft.description);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(StorageError::Validation(errors))
        }
    }
}

fn not_found(id: &str) -> StorageError {
    StorageError::NotFound {
        kind: "Plan",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn service() -> (PlanService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (PlanService::new(store.clone()), store)
    }

    #[test]
    fn test_empty_store_has_no_plans() {
        let (plans, _) = service();
        assert!(plans.get_plans().is_empty());
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let (plans, _) = service();
        let a = plans.create_plan(PlanDraft::new("Basic", "Starter tier", 5.0)).unwrap();
        let b = plans.create_plan(PlanDraft::new("Pro", "Everything", 20.0)).unwrap();

        assert_ne!(a.id, b.id);
        assert!(PlanService::validate_plan_id(&a.id));
        let stored = plans.get_plans();
        assert_eq!(stored, vec![a, b]);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let (plans, _) = service();
        let first = plans.create_plan(PlanDraft::new("A", "a", 1.0)).unwrap();
        let second = plans.create_plan(PlanDraft::new("B", "b", 2.0)).unwrap();

        let updated = plans
            .update_plan(&first.id, PlanDraft::new("A2", "a2", 3.0))
            .unwrap();
        assert_eq!(updated.id, first.id);

        let stored = plans.get_plans();
        assert_eq!(stored[0].name, "A2");
        assert_eq!(stored[0].price, 3.0);
        assert_eq!(stored[1], second);
    }

    #[test]
    fn test_update_unknown_plan_fails() {
        let (plans, _) = service();
        let err = plans
            .update_plan("missing", PlanDraft::new("A", "a", 1.0))
            .unwrap_err();
        assert_eq!(err.to_string(), "Plan with ID missing not found");
    }

    #[test]
    fn test_delete() {
        let (plans, _) = service();
        let plan = plans.create_plan(PlanDraft::new("A", "a", 1.0)).unwrap();

        plans.delete_plan(&plan.id).unwrap();
        assert!(plans.get_plan_by_id(&plan.id).is_none());
        assert!(matches!(
            plans.delete_plan(&plan.id),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_draft_is_not_persisted() {
        let (plans, store) = service();
        let err = plans.create_plan(PlanDraft::new("  ", "", 0.0)).unwrap_err();

        match err {
            StorageError::Validation(errors) => assert_eq!(
                errors,
                vec!["Plan name is required", "Plan description is required"]
            ),
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.get_item(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_list_reads_as_empty() {
        let (plans, store) = service();
        store.set_item(STORAGE_KEY, "not json").unwrap();
        assert!(plans.get_plans().is_empty());
    }

    #[test]
    fn test_validate_plan_id() {
        assert!(!PlanService::validate_plan_id(""));
        assert!(!PlanService::validate_plan_id("   "));
        assert!(PlanService::validate_plan_id("17"));
    }

    #[test]
    fn test_reads_plans_written_by_other_clients() {
        let (plans, store) = service();
        store
            .set_item(
                STORAGE_KEY,
                r#"[{"id":"1712345678901abc123xyz","name":"Team","description":"For teams","price":49}]"#,
            )
            .unwrap();

        let plan = plans.get_plan_by_id("1712345678901abc123xyz").unwrap();
        assert_eq!(plan.name, "Team");
        assert_eq!(plan.price, 49.0);
    }
}
