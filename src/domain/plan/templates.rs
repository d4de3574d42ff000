//! The four weekly task templates.

use crate::config::PlanConfig;
use crate::domain::foundation::{Platform, Priority};
use crate::domain::scoring::CombinedScore;

/// Condition for including a task. Absent platforms count as score 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    LinkedInIncomplete,
    StackOverflowBelowAnswering,
    StackOverflowScored,
}

impl Gate {
    pub fn is_open(&self, combined: &CombinedScore, config: &PlanConfig) -> bool {
        let score = |platform| {
            combined
                .platform_total(platform)
                .map(|total| total.value())
                .unwrap_or(0)
        };
        match self {
            Gate::Always => true,
            Gate::LinkedInIncomplete => {
                score(Platform::LinkedIn) < config.linkedin_completion_below
            }
            Gate::StackOverflowBelowAnswering => {
                score(Platform::StackOverflow) < config.stackoverflow_answering_below
            }
            Gate::StackOverflowScored => score(Platform::StackOverflow) > 0,
        }
    }
}

/// One schedulable task and how far the day counter moves after it.
#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub week: u8,
    pub priority: Priority,
    pub description: &'static str,
    pub estimated_time: &'static str,
    pub platforms: &'static [Platform],
    pub gate: Gate,
    /// Days to advance once this task is scheduled.
    pub advance: u8,
    /// Whether the day still advances when the gate is closed.
    pub advance_when_skipped: bool,
}

const ALL: &[Platform] = &[Platform::GitHub, Platform::StackOverflow, Platform::LinkedIn];

pub const TEMPLATES: [TaskTemplate; 12] = [
    // Week 1: profile optimization
    TaskTemplate {
        week: 1,
        priority: Priority::High,
        description: "Audit all profiles - update bios, photos, and contact information",
        estimated_time: "2 hours",
        platforms: ALL,
        gate: Gate::Always,
        advance: 2,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 1,
        priority: Priority::High,
        description: "Complete LinkedIn profile - add missing experiences, skills, and summary",
        estimated_time: "1-2 hours",
        platforms: &[Platform::LinkedIn],
        gate: Gate::LinkedInIncomplete,
        advance: 2,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 1,
        priority: Priority::Medium,
        description: "Create or update your professional README on GitHub with portfolio highlights",
        estimated_time: "1 hour",
        platforms: &[Platform::GitHub],
        gate: Gate::Always,
        advance: 2,
        advance_when_skipped: false,
    },
    // Week 2: content creation
    TaskTemplate {
        week: 2,
        priority: Priority::High,
        description: "Start a new public project or contribute to an open-source project",
        estimated_time: "3-5 hours",
        platforms: &[Platform::GitHub],
        gate: Gate::Always,
        advance: 3,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 2,
        priority: Priority::Medium,
        description: "Answer 3-5 StackOverflow questions in your expertise areas",
        estimated_time: "2 hours",
        platforms: &[Platform::StackOverflow],
        gate: Gate::StackOverflowBelowAnswering,
        advance: 2,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 2,
        priority: Priority::Medium,
        description: "Write and publish a technical article or blog post",
        estimated_time: "3 hours",
        platforms: &[Platform::GitHub, Platform::LinkedIn],
        gate: Gate::Always,
        advance: 3,
        advance_when_skipped: false,
    },
    // Week 3: engagement
    TaskTemplate {
        week: 3,
        priority: Priority::Medium,
        description: "Star, fork, and contribute to 5 interesting GitHub repositories",
        estimated_time: "2 hours",
        platforms: &[Platform::GitHub],
        gate: Gate::Always,
        advance: 2,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 3,
        priority: Priority::Low,
        description: "Engage with LinkedIn content - comment on posts and share insights",
        estimated_time: "30 minutes",
        platforms: &[Platform::LinkedIn],
        gate: Gate::Always,
        advance: 2,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 3,
        priority: Priority::Low,
        description: "Review and improve your top StackOverflow answers",
        estimated_time: "1 hour",
        platforms: &[Platform::StackOverflow],
        gate: Gate::StackOverflowScored,
        advance: 3,
        advance_when_skipped: true,
    },
    // Week 4: consolidation and networking
    TaskTemplate {
        week: 4,
        priority: Priority::Medium,
        description: "Update repository documentation and README files",
        estimated_time: "2 hours",
        platforms: &[Platform::GitHub],
        gate: Gate::Always,
        advance: 2,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 4,
        priority: Priority::Medium,
        description: "Connect with 10-20 professionals in your field on LinkedIn",
        estimated_time: "1 hour",
        platforms: &[Platform::LinkedIn],
        gate: Gate::Always,
        advance: 2,
        advance_when_skipped: false,
    },
    TaskTemplate {
        week: 4,
        priority: Priority::High,
        description: "Review progress and plan next month's goals",
        estimated_time: "1 hour",
        platforms: ALL,
        gate: Gate::Always,
        advance: 0,
        advance_when_skipped: false,
    },
];
