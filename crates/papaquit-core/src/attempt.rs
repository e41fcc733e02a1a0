//! Quit-attempt history: a contiguous smoke-free span per attempt, with a
//! relapse closing the current attempt and opening a new one.
//!
//! Modeled as an explicit sum type so "at most one active attempt" is an
//! invariant the history can enforce rather than a convention over
//! nullable columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One smoke-free span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuitAttempt {
    /// The ongoing attempt.
    Active { started_on: NaiveDate },
    /// A past attempt closed by a relapse.
    Ended {
        started_on: NaiveDate,
        ended_on: NaiveDate,
        days_lasted: i64,
    },
}

impl QuitAttempt {
    pub fn started_on(&self) -> NaiveDate {
        match self {
            QuitAttempt::Active { started_on } | QuitAttempt::Ended { started_on, .. } => {
                *started_on
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, QuitAttempt::Active { .. })
    }

    /// Close this attempt as of `ended_on`. Days lasted never go negative
    /// even if the recorded start postdates the relapse.
    fn end(self, ended_on: NaiveDate) -> QuitAttempt {
        let started_on = self.started_on();
        QuitAttempt::Ended {
            started_on,
            ended_on,
            days_lasted: (ended_on - started_on).num_days().max(0),
        }
    }
}

/// Ordered attempt history holding at most one active attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptHistory {
    attempts: Vec<QuitAttempt>,
}

impl AttemptHistory {
    /// Rebuild a history from stored attempts. Extra active rows (which
    /// the storage schema should already prevent) are closed against
    /// their own start date, keeping the single-active invariant.
    pub fn from_attempts(attempts: Vec<QuitAttempt>) -> Self {
        let mut history = Self::default();
        for attempt in attempts {
            match attempt {
                QuitAttempt::Active { started_on } if history.current().is_some() => {
                    history.attempts.push(QuitAttempt::Ended {
                        started_on,
                        ended_on: started_on,
                        days_lasted: 0,
                    });
                }
                other => history.attempts.push(other),
            }
        }
        history
    }

    /// Start the first attempt, or return the already-active one.
    pub fn start(&mut self, started_on: NaiveDate) -> QuitAttempt {
        if let Some(active) = self.current() {
            return active;
        }
        let attempt = QuitAttempt::Active { started_on };
        self.attempts.push(attempt);
        attempt
    }

    /// The ongoing attempt, if any.
    pub fn current(&self) -> Option<QuitAttempt> {
        self.attempts.iter().copied().find(QuitAttempt::is_active)
    }

    /// Close the current attempt as of `today` and open a fresh one
    /// starting today. With no active attempt this just starts one.
    pub fn relapse(&mut self, today: NaiveDate) -> QuitAttempt {
        if let Some(pos) = self.attempts.iter().position(QuitAttempt::is_active) {
            self.attempts[pos] = self.attempts[pos].end(today);
        }
        let fresh = QuitAttempt::Active { started_on: today };
        self.attempts.push(fresh);
        fresh
    }

    pub fn attempts(&self) -> &[QuitAttempt] {
        &self.attempts
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn active_count(history: &AttemptHistory) -> usize {
        history.attempts().iter().filter(|a| a.is_active()).count()
    }

    #[test]
    fn start_opens_a_single_active_attempt() {
        let mut history = AttemptHistory::default();
        history.start(date(2024, 1, 1));
        assert_eq!(active_count(&history), 1);
        assert_eq!(
            history.current(),
            Some(QuitAttempt::Active {
                started_on: date(2024, 1, 1)
            })
        );
    }

    #[test]
    fn start_is_idempotent_while_active() {
        let mut history = AttemptHistory::default();
        history.start(date(2024, 1, 1));
        history.start(date(2024, 2, 1));
        assert_eq!(history.attempts().len(), 1);
        assert_eq!(history.current().unwrap().started_on(), date(2024, 1, 1));
    }

    #[test]
    fn relapse_closes_and_reopens() {
        let mut history = AttemptHistory::default();
        history.start(date(2024, 1, 1));
        history.relapse(date(2024, 1, 11));

        assert_eq!(history.attempts().len(), 2);
        assert_eq!(active_count(&history), 1);
        assert_eq!(
            history.attempts()[0],
            QuitAttempt::Ended {
                started_on: date(2024, 1, 1),
                ended_on: date(2024, 1, 11),
                days_lasted: 10,
            }
        );
        assert_eq!(history.current().unwrap().started_on(), date(2024, 1, 11));
    }

    #[test]
    fn repeated_relapses_keep_one_active() {
        let mut history = AttemptHistory::default();
        history.start(date(2024, 1, 1));
        history.relapse(date(2024, 1, 5));
        history.relapse(date(2024, 1, 20));
        history.relapse(date(2024, 3, 2));

        assert_eq!(history.attempts().len(), 4);
        assert_eq!(active_count(&history), 1);
    }

    #[test]
    fn relapse_without_active_attempt_starts_one() {
        let mut history = AttemptHistory::default();
        history.relapse(date(2024, 1, 11));
        assert_eq!(history.attempts().len(), 1);
        assert!(history.current().is_some());
    }

    #[test]
    fn days_lasted_clamps_at_zero() {
        // relapse recorded before the stored start date
        let mut history = AttemptHistory::default();
        history.start(date(2024, 5, 1));
        history.relapse(date(2024, 4, 1));
        match history.attempts()[0] {
            QuitAttempt::Ended { days_lasted, .. } => assert_eq!(days_lasted, 0),
            _ => panic!("first attempt should be ended"),
        }
    }

    #[test]
    fn from_attempts_repairs_duplicate_actives() {
        let history = AttemptHistory::from_attempts(vec![
            QuitAttempt::Active {
                started_on: date(2024, 1, 1),
            },
            QuitAttempt::Active {
                started_on: date(2024, 2, 1),
            },
        ]);
        assert_eq!(active_count(&history), 1);
        assert_eq!(history.attempts().len(), 2);
    }
}
