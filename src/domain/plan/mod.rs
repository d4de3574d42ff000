//! Plan module - The 30-day action plan.
//!
//! Four weekly templates are walked in order. Each template either schedules
//! its task on the current day and advances the counter, or is skipped.
//! Skipped tasks leave the counter alone unless the template keeps its slot.
//! Day values are therefore non-decreasing and stay within one month.

mod templates;

pub use templates::{Gate, TaskTemplate, TEMPLATES};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::PlanConfig;
use crate::domain::foundation::{Platform, Priority};
use crate::domain::scoring::CombinedScore;

/// Last day an action item may fall on.
pub const MAX_PLAN_DAY: u8 = 31;

/// One scheduled task in the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Day of the plan, starting at 1.
    pub day: u8,
    pub week: u8,
    pub priority: Priority,
    pub description: String,
    pub estimated_time: String,
    pub platforms: BTreeSet<Platform>,
    /// Calendar date for display when a start date was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_on: Option<NaiveDate>,
}

impl ActionItem {
    /// True when the task targets every platform.
    pub fn is_cross_platform(&self) -> bool {
        self.platforms.len() == Platform::ordered().len()
    }
}

pub struct ActionPlanBuilder<'a> {
    config: &'a PlanConfig,
    start: Option<NaiveDate>,
}

impl<'a> ActionPlanBuilder<'a> {
    pub fn new(config: &'a PlanConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Stamps each item with a calendar date. Never affects which tasks are chosen.
    pub fn starting_on(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn build(&self, combined: &CombinedScore) -> Vec<ActionItem> {
        if combined.is_empty() {
            return Vec::new();
        }

        let mut day: u8 = 1;
        let mut plan = Vec::with_capacity(TEMPLATES.len());
        for template in TEMPLATES.iter() {
            if !template.gate.is_open(combined, self.config) {
                if template.advance_when_skipped {
                    day = day.saturating_add(template.advance).min(MAX_PLAN_DAY);
                }
                continue;
            }
            plan.push(ActionItem {
                day,
                week: template.week,
                priority: template.priority,
                description: template.description.to_string(),
                estimated_time: template.estimated_time.to_string(),
                platforms: template.platforms.iter().copied().collect(),
                scheduled_on: self.date_for(day),
            });
            day = day.saturating_add(template.advance).min(MAX_PLAN_DAY);
        }

        tracing::debug!(items = plan.len(), "action plan built");
        plan
    }

    fn date_for(&self, day: u8) -> Option<NaiveDate> {
        self.start?
            .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
    }
}
