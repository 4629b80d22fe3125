// ABOUTME: Injectable source of "today" for plan generation
// ABOUTME: System clock for production, fixed clock for deterministic prompts and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Datelike, Local, Utc, Weekday};

/// Provides the weekday named in the prompt and the timestamp stamped on plans
pub trait PlanClock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Weekday the plan is generated for
    fn weekday(&self) -> Weekday;
}

/// Wall clock; the weekday follows the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl PlanClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn weekday(&self) -> Weekday {
        Local::now().weekday()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    weekday: Weekday,
}

impl FixedClock {
    /// Freeze at `instant`, using its UTC weekday
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            weekday: instant.weekday(),
        }
    }

    /// Override the weekday independently of the instant
    #[must_use]
    pub const fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = weekday;
        self
    }
}

impl PlanClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// English day name, e.g. "Monday"
#[must_use]
pub const fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
