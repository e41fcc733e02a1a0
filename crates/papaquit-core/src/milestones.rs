//! Smoke-free milestone catalog.
//!
//! A static, ascending-by-day table of recovery milestones with
//! fertility-focused descriptions. The table is immutable; crossing a
//! threshold is detected here, while recording the achievement (and any
//! notification) is the caller's idempotent side effect.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Serialize;

/// A fixed day-count threshold with descriptive copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Stable identifier used for the persisted achieved-set.
    pub key: &'static str,
    /// Smoke-free days required.
    pub threshold_days: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Milestone {
    /// Days left until this milestone from the given elapsed count.
    pub fn remaining_from(&self, elapsed_days: i64) -> i64 {
        self.threshold_days - elapsed_days
    }
}

/// The catalog, ordered ascending by `threshold_days`. Never mutated.
pub static MILESTONES: [Milestone; 10] = [
    Milestone {
        key: "day_1",
        threshold_days: 1,
        title: "1 day smoke-free!",
        description: "Carbon monoxide in your blood is returning to normal. Your body is using oxygen efficiently again.",
        icon: "🌱",
    },
    Milestone {
        key: "day_3",
        threshold_days: 3,
        title: "3 days smoke-free!",
        description: "Nicotine is almost entirely out of your system. Withdrawal peaks here, so hang in there.",
        icon: "💪",
    },
    Milestone {
        key: "day_7",
        threshold_days: 7,
        title: "1 week smoke-free!",
        description: "Taste and smell are recovering. Oxidative stress on your sperm is starting to drop.",
        icon: "⭐",
    },
    Milestone {
        key: "day_14",
        threshold_days: 14,
        title: "2 weeks smoke-free!",
        description: "Sperm motility is starting to improve. Circulation is better and so is sexual function.",
        icon: "🎯",
    },
    Milestone {
        key: "day_30",
        threshold_days: 30,
        title: "1 month smoke-free!",
        description: "Lower risk of sperm DNA damage. Lung function has improved noticeably.",
        icon: "🏆",
    },
    Milestone {
        key: "day_60",
        threshold_days: 60,
        title: "2 months smoke-free!",
        description: "Sperm count and morphology are trending up. Whole-body oxidative stress is way down.",
        icon: "🌟",
    },
    Milestone {
        key: "day_74",
        threshold_days: 74,
        title: "A fresh sperm cycle!",
        description: "The roughly 74-day sperm production cycle has completed. Your first fully smoke-free sperm are ready.",
        icon: "🍀",
    },
    Milestone {
        key: "day_90",
        threshold_days: 90,
        title: "3 months smoke-free!",
        description: "Sperm quality (motility, morphology, count) has improved markedly. You are close to peak shape for conception.",
        icon: "👶",
    },
    Milestone {
        key: "day_180",
        threshold_days: 180,
        title: "Half a year smoke-free!",
        description: "Lung cilia have mostly recovered. Sperm quality is on par with a non-smoker's.",
        icon: "🎊",
    },
    Milestone {
        key: "day_365",
        threshold_days: 365,
        title: "1 year smoke-free!",
        description: "Heart disease risk is half a smoker's. Your body is at its best for the baby.",
        icon: "🥇",
    },
];

/// Every milestone whose threshold is within `elapsed_days`, ascending.
pub fn achieved(elapsed_days: i64) -> &'static [Milestone] {
    let count = MILESTONES
        .iter()
        .take_while(|m| m.threshold_days <= elapsed_days)
        .count();
    &MILESTONES[..count]
}

/// The first milestone still ahead, or `None` once all are achieved.
pub fn next(elapsed_days: i64) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.threshold_days > elapsed_days)
}

/// Catalog lookup by key.
pub fn by_key(key: &str) -> Option<&'static Milestone> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Milestone>> = OnceLock::new();
    let index = INDEX.get_or_init(|| MILESTONES.iter().map(|m| (m.key, m)).collect());
    index.get(key).copied()
}

/// Milestones crossed by `elapsed_days` that are not yet in the persisted
/// achieved-set. The caller records each exactly once (idempotent upsert)
/// and may fire a notification.
pub fn newly_achieved(elapsed_days: i64, recorded: &HashSet<String>) -> Vec<&'static Milestone> {
    achieved(elapsed_days)
        .iter()
        .filter(|m| !recorded.contains(m.key))
        .collect()
}
