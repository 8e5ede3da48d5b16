//! Meal plan service — use-cases for managing meal plans.

use dinehub_domain::error::{DineHubError, NotFoundError};
use dinehub_domain::id::MealPlanId;
use dinehub_domain::meal_plan::{MealPlan, MealPlanPatch};

use crate::ports::MealPlanRepository;

/// Application service for meal plan CRUD operations.
pub struct MealPlanService<R> {
    repo: R,
}

impl<R: MealPlanRepository> MealPlanService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new meal plan after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if invariants fail,
    /// [`DineHubError::Conflict`] if the identifier is already taken, or a
    /// storage error propagated from the repository.
    pub async fn create_meal_plan(&self, plan: MealPlan) -> Result<MealPlan, DineHubError> {
        plan.validate()?;
        self.repo.create(plan).await
    }

    /// Look up a meal plan by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no meal plan with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_meal_plan(&self, id: MealPlanId) -> Result<MealPlan, DineHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "MealPlan",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all meal plans.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_meal_plans(&self) -> Result<Vec<MealPlan>, DineHubError> {
        self.repo.get_all().await
    }

    /// Merge a partial update into an existing meal plan.
    ///
    /// The patched record is re-validated before it is stored, so an update
    /// cannot leave a plan with, say, an inverted validity window.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no meal plan with `id`
    /// exists, [`DineHubError::Validation`] if the patched record violates
    /// invariants, or a storage error from the repository.
    pub async fn update_meal_plan(
        &self,
        id: MealPlanId,
        patch: MealPlanPatch,
    ) -> Result<MealPlan, DineHubError> {
        let mut plan = self.get_meal_plan(id).await?;
        plan.apply(patch);
        plan.validate()?;
        self.repo.update(plan).await
    }

    /// Delete a meal plan by id.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no meal plan with `id`
    /// exists, or a storage error propagated from the repository.
    pub async fn delete_meal_plan(&self, id: MealPlanId) -> Result<(), DineHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "MealPlan",
                id: id.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinehub_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryMealPlanRepo {
        store: Mutex<HashMap<MealPlanId, MealPlan>>,
    }

    impl MealPlanRepository for InMemoryMealPlanRepo {
        fn create(
            &self,
            plan: MealPlan,
        ) -> impl Future<Output = Result<MealPlan, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(plan.id, plan.clone());
            async { Ok(plan) }
        }

        fn get_by_id(
            &self,
            id: MealPlanId,
        ) -> impl Future<Output = Result<Option<MealPlan>, DineHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<MealPlan>, DineHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<MealPlan> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            plan: MealPlan,
        ) -> impl Future<Output = Result<MealPlan, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(plan.id, plan.clone());
            async { Ok(plan) }
        }

        fn delete(
            &self,
            id: MealPlanId,
        ) -> impl Future<Output = Result<bool, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> MealPlanService<InMemoryMealPlanRepo> {
        MealPlanService::new(InMemoryMealPlanRepo::default())
    }

    fn valid_plan() -> MealPlan {
        MealPlan::builder()
            .name("Unlimited 7 day")
            .plan_type("swipes")
            .cost(1000.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_fetch_meal_plan() {
        let svc = make_service();
        let plan = valid_plan();
        let id = plan.id;

        svc.create_meal_plan(plan).await.unwrap();

        let fetched = svc.get_meal_plan(id).await.unwrap();
        assert_eq!(fetched.name, "Unlimited 7 day");
        assert_eq!(fetched.cost, 1000.0);
    }

    #[tokio::test]
    async fn should_reject_create_when_cost_is_negative() {
        let svc = make_service();
        let mut plan = valid_plan();
        plan.cost = -100.0;

        let result = svc.create_meal_plan(plan).await;
        assert!(matches!(
            result,
            Err(DineHubError::Validation(ValidationError::InvalidCost))
        ));
    }

    #[tokio::test]
    async fn should_patch_cost_and_preserve_window() {
        let svc = make_service();
        let plan = valid_plan();
        let id = plan.id;
        svc.create_meal_plan(plan).await.unwrap();

        let updated = svc
            .update_meal_plan(
                id,
                MealPlanPatch {
                    cost: Some(500.0),
                    ..MealPlanPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.cost, 500.0);
        assert_eq!(updated.plan_type, "swipes");
        assert!(updated.start_date.is_none());
    }

    #[tokio::test]
    async fn should_not_persist_update_that_inverts_window() {
        let svc = make_service();
        let start = dinehub_domain::time::now();
        let plan = MealPlan::builder()
            .name("Fall semester")
            .plan_type("points")
            .cost(800.0)
            .start_date(start)
            .build()
            .unwrap();
        let id = plan.id;
        svc.create_meal_plan(plan).await.unwrap();

        let result = svc
            .update_meal_plan(
                id,
                MealPlanPatch {
                    end_date: Some(start - chrono::Duration::days(30)),
                    ..MealPlanPatch::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(DineHubError::Validation(
                ValidationError::InvertedDateRange
            ))
        ));

        let unchanged = svc.get_meal_plan(id).await.unwrap();
        assert!(unchanged.end_date.is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_plan() {
        let svc = make_service();
        let result = svc.delete_meal_plan(MealPlanId::new()).await;
        assert!(matches!(result, Err(DineHubError::NotFound(_))));
    }
}
