//! Meal plan — a purchasable dining plan with a cost and an optional
//! validity window.

use serde::{Deserialize, Serialize};

use crate::error::{DineHubError, ValidationError};
use crate::id::MealPlanId;
use crate::time::Timestamp;

/// A meal plan record.
///
/// `plan_type` is a free-form label such as `"swipes"` or `"points"`; it is
/// serialized as `type` on the wire. The validity window is optional on both
/// ends, but when both dates are present the window must not be inverted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: MealPlanId,
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    /// Cost in USD.
    pub cost: f64,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MealPlan {
    /// Create a builder for constructing a [`MealPlan`].
    #[must_use]
    pub fn builder() -> MealPlanBuilder {
        MealPlanBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] when `name` or `plan_type` is
    /// empty, `cost` is negative or non-finite, or the validity window is
    /// inverted.
    pub fn validate(&self) -> Result<(), DineHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField { field: "name" }.into());
        }
        if self.plan_type.is_empty() {
            return Err(ValidationError::EmptyField { field: "type" }.into());
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(ValidationError::InvalidCost.into());
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err(ValidationError::InvertedDateRange.into());
        }
        Ok(())
    }

    /// Merge a partial update into this record.
    ///
    /// The identifier and `created_at` are untouched; `updated_at` is bumped.
    pub fn apply(&mut self, patch: MealPlanPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(plan_type) = patch.plan_type {
            self.plan_type = plan_type;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = Some(start_date);
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = Some(end_date);
        }
        self.updated_at = crate::time::now();
    }
}

/// Partial update for a [`MealPlan`]. Omitted fields are preserved.
#[derive(Debug, Clone, Default)]
pub struct MealPlanPatch {
    pub name: Option<String>,
    pub plan_type: Option<String>,
    pub cost: Option<f64>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Step-by-step builder for [`MealPlan`].
#[derive(Debug, Default)]
pub struct MealPlanBuilder {
    id: Option<MealPlanId>,
    name: Option<String>,
    plan_type: Option<String>,
    cost: Option<f64>,
    start_date: Option<Timestamp>,
    end_date: Option<Timestamp>,
}

impl MealPlanBuilder {
    #[must_use]
    pub fn id(mut self, id: MealPlanId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn plan_type(mut self, plan_type: impl Into<String>) -> Self {
        self.plan_type = Some(plan_type.into());
        self
    }

    #[must_use]
    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Timestamp) -> Self {
        self.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Timestamp) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Consume the builder, validate, and return a [`MealPlan`].
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if invariants fail.
    pub fn build(self) -> Result<MealPlan, DineHubError> {
        let now = crate::time::now();
        let plan = MealPlan {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            plan_type: self.plan_type.unwrap_or_default(),
            cost: self.cost.unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: now,
            updated_at: now,
        };
        plan.validate()?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_plan() -> MealPlan {
        MealPlan::builder()
            .name("Unlimited 7 day")
            .plan_type("swipes")
            .cost(1000.0)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_plan_when_required_fields_provided() {
        let plan = valid_plan();
        assert_eq!(plan.plan_type, "swipes");
        assert!(plan.start_date.is_none());
    }

    #[test]
    fn should_return_validation_error_when_cost_is_negative() {
        let result = MealPlan::builder()
            .name("Unlimited 7 day")
            .plan_type("swipes")
            .cost(-1.0)
            .build();
        assert!(matches!(
            result,
            Err(DineHubError::Validation(ValidationError::InvalidCost))
        ));
    }

    #[test]
    fn should_return_validation_error_when_cost_is_nan() {
        let result = MealPlan::builder()
            .name("Unlimited 7 day")
            .plan_type("swipes")
            .cost(f64::NAN)
            .build();
        assert!(matches!(
            result,
            Err(DineHubError::Validation(ValidationError::InvalidCost))
        ));
    }

    #[test]
    fn should_return_validation_error_when_window_is_inverted() {
        let start = chrono::Utc.with_ymd_and_hms(2026, 9, 14, 0, 0, 0).unwrap();
        let end = chrono::Utc.with_ymd_and_hms(2025, 9, 14, 0, 0, 0).unwrap();
        let result = MealPlan::builder()
            .name("Unlimited 7 day")
            .plan_type("swipes")
            .cost(1000.0)
            .start_date(start)
            .end_date(end)
            .build();
        assert!(matches!(
            result,
            Err(DineHubError::Validation(
                ValidationError::InvertedDateRange
            ))
        ));
    }

    #[test]
    fn should_serialize_plan_type_as_type() {
        let plan = valid_plan();
        let json: serde_json::Value = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["type"], "swipes");
        assert!(json.get("plan_type").is_none());
    }

    #[test]
    fn should_apply_patch_to_cost_only() {
        let mut plan = valid_plan();
        let created_at = plan.created_at;

        plan.apply(MealPlanPatch {
            cost: Some(500.0),
            ..MealPlanPatch::default()
        });

        assert_eq!(plan.cost, 500.0);
        assert_eq!(plan.name, "Unlimited 7 day");
        assert_eq!(plan.created_at, created_at);
    }
}
