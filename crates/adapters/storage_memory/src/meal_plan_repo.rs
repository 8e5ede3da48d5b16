//! In-memory implementation of [`MealPlanRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use dinehub_app::ports::MealPlanRepository;
use dinehub_domain::error::{ConflictError, DineHubError};
use dinehub_domain::id::MealPlanId;
use dinehub_domain::meal_plan::MealPlan;

use crate::lock;

/// Mutex-guarded map of meal plans by id.
#[derive(Default)]
pub struct InMemoryMealPlanRepository {
    store: Mutex<HashMap<MealPlanId, MealPlan>>,
}

impl InMemoryMealPlanRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealPlanRepository for InMemoryMealPlanRepository {
    fn create(
        &self,
        plan: MealPlan,
    ) -> impl Future<Output = Result<MealPlan, DineHubError>> + Send {
        let result = lock(&self.store).and_then(|mut store| {
            if store.contains_key(&plan.id) {
                return Err(ConflictError {
                    entity: "MealPlan",
                    id: plan.id.to_string(),
                }
                .into());
            }
            store.insert(plan.id, plan.clone());
            Ok(plan)
        });
        async move { result }
    }

    fn get_by_id(
        &self,
        id: MealPlanId,
    ) -> impl Future<Output = Result<Option<MealPlan>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.get(&id).cloned());
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<MealPlan>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.values().cloned().collect());
        async move { result }
    }

    fn update(
        &self,
        plan: MealPlan,
    ) -> impl Future<Output = Result<MealPlan, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| {
            store.insert(plan.id, plan.clone());
            plan
        });
        async move { result }
    }

    fn delete(&self, id: MealPlanId) -> impl Future<Output = Result<bool, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| store.remove(&id).is_some());
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> MealPlan {
        MealPlan::builder()
            .name("Unlimited 7 day")
            .plan_type("swipes")
            .cost(1000.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_store_and_fetch_meal_plan() {
        let repo = InMemoryMealPlanRepository::new();
        let plan = plan();
        let id = plan.id;

        repo.create(plan).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.plan_type, "swipes");
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_on_create() {
        let repo = InMemoryMealPlanRepository::new();
        let plan = plan();
        repo.create(plan.clone()).await.unwrap();

        let result = repo.create(plan).await;
        assert!(matches!(result, Err(DineHubError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_list_created_plans() {
        let repo = InMemoryMealPlanRepository::new();
        repo.create(plan()).await.unwrap();
        repo.create(
            MealPlan::builder()
                .name("Unlimited 5 day")
                .plan_type("swipes")
                .cost(800.0)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
