// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit schedule generation
//!
//! A [`Schedule`] walks the calendar days of a [`ScheduleWindow`] in order.
//! Each day is gated by the [`ParticipationPolicy`]. A participating day then
//! gets a commit count from the [`VolumePolicy`], and one [`CommitEvent`] per
//! commit, spaced one minute apart from the day's anchor time.
//!
//! Draws are taken from the injected [`RandomSource`] in a fixed order:
//! participation, then volume, then one message draw per event. Weekend
//! days excluded by policy consume no draws.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RunError;
use crate::ledger::EventSink;
use crate::messages;
use crate::random::RandomSource;

/// Hour of the first commit on every participating day
pub const ANCHOR_HOUR: u32 = 20;

/// Minute of the first commit on every participating day
pub const ANCHOR_MINUTE: u32 = 0;

/// Upper bound for the per-day commit count
pub const MAX_COMMITS_CEILING: u8 = 20;

/// `date` at the anchor time of day
#[must_use]
pub fn anchor_for(date: NaiveDate) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(ANCHOR_HOUR, ANCHOR_MINUTE, 0).unwrap_or(NaiveTime::MIN);
    date.and_time(time)
}

/// The range of calendar days to consider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    start: NaiveDateTime,
    days_before: u32,
    days_after: u32,
}

impl ScheduleWindow {
    /// Window of `days_before` days before `today` and `days_after` days
    /// from `today` onwards
    ///
    /// Returns `None` if either end falls outside the representable date
    /// range.
    #[must_use]
    pub fn new(today: NaiveDate, days_before: u32, days_after: u32) -> Option<Self> {
        let anchor = anchor_for(today);
        let start = anchor.checked_sub_days(Days::new(u64::from(days_before)))?;
        // Last day (today + days_after - 1) must exist too, so the walk never overflows
        if let Some(last) = days_after.checked_sub(1) {
            anchor.checked_add_days(Days::new(u64::from(last)))?;
        }
        Some(Self {
            start,
            days_before,
            days_after,
        })
    }

    /// First candidate day, at the anchor time
    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Number of candidate days
    #[must_use]
    pub fn len(&self) -> u64 {
        u64::from(self.days_before) + u64::from(self.days_after)
    }

    /// True if the window has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `n`th candidate day, or `None` past the end
    #[must_use]
    pub fn day(&self, n: u64) -> Option<NaiveDateTime> {
        if n >= self.len() {
            return None;
        }
        self.start.checked_add_days(Days::new(n))
    }

    /// All candidate days in order
    pub fn candidate_days(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        (0..self.len()).map_while(move |n| self.day(n))
    }
}

/// Which days get commits at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipationPolicy {
    exclude_weekends: bool,
    frequency: u8,
}

impl ParticipationPolicy {
    /// Policy with a percentage chance per day, clamped to `0..=100`
    #[must_use]
    pub fn new(exclude_weekends: bool, frequency: i64) -> Self {
        Self {
            exclude_weekends,
            frequency: frequency.clamp(0, 100) as u8,
        }
    }

    /// The clamped percentage
    #[must_use]
    pub fn frequency(&self) -> u8 {
        self.frequency
    }

    /// Whether weekends are skipped
    #[must_use]
    pub fn excludes_weekends(&self) -> bool {
        self.exclude_weekends
    }

    /// True if `day` is a Saturday or Sunday and weekends are excluded
    #[must_use]
    pub fn is_excluded(&self, day: NaiveDateTime) -> bool {
        self.exclude_weekends && day.weekday().num_days_from_monday() >= 5
    }

    /// Decide whether `day` participates
    ///
    /// The trial draws from `1..=100` and succeeds when the draw is at most
    /// the frequency, so 0% never and 100% always participates.
    pub fn participates<R: RandomSource + ?Sized>(&self, day: NaiveDateTime, rng: &mut R) -> bool {
        if self.is_excluded(day) {
            return false;
        }
        rng.uniform(1, 100) <= u32::from(self.frequency)
    }
}

/// How many commits a participating day gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumePolicy {
    max: u8,
}

impl VolumePolicy {
    /// Policy with the requested maximum clamped to `1..=20`
    #[must_use]
    pub fn new(requested: i64) -> Self {
        Self {
            max: requested.clamp(1, i64::from(MAX_COMMITS_CEILING)) as u8,
        }
    }

    /// The clamped maximum
    #[must_use]
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Draw a commit count from `1..=max`
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.uniform(1, u32::from(self.max))
    }
}

/// A single commit to be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEvent {
    /// Author date for the commit
    pub timestamp: NaiveDateTime,
    /// Commit subject, also the line appended to the contribution log
    pub message: String,
}

/// A window plus the policies that decide what happens on each day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Days to walk
    pub window: ScheduleWindow,
    /// Per-day participation
    pub participation: ParticipationPolicy,
    /// Per-day volume
    pub volume: VolumePolicy,
}

impl Schedule {
    /// Bundle a window and its policies
    #[must_use]
    pub fn new(
        window: ScheduleWindow,
        participation: ParticipationPolicy,
        volume: VolumePolicy,
    ) -> Self {
        Self {
            window,
            participation,
            volume,
        }
    }

    /// Lazily generate events in chronological order
    pub fn events<R: RandomSource>(&self, rng: R) -> Events<'_, R> {
        Events {
            schedule: self,
            rng,
            next_day: 0,
            current: None,
        }
    }

    /// Generate every event into `sink`, one at a time, and return the total
    ///
    /// # Errors
    ///
    /// Stops at the first error returned by the sink.
    pub fn generate<R, S>(&self, rng: R, sink: &mut S) -> Result<usize, RunError>
    where
        R: RandomSource,
        S: EventSink + ?Sized,
    {
        let mut total = 0;
        for event in self.events(rng) {
            sink.accept(&event)?;
            total += 1;
        }
        debug!(total, days = self.window.len(), "schedule exhausted");
        Ok(total)
    }
}

#[derive(Debug, Clone, Copy)]
struct DayCursor {
    day: NaiveDateTime,
    count: u32,
    emitted: u32,
}

/// Iterator over the events of a [`Schedule`]
#[derive(Debug)]
pub struct Events<'a, R> {
    schedule: &'a Schedule,
    rng: R,
    next_day: u64,
    current: Option<DayCursor>,
}

impl<R: RandomSource> Iterator for Events<'_, R> {
    type Item = CommitEvent;

    fn next(&mut self) -> Option<CommitEvent> {
        loop {
            if let Some(cursor) = self.current.as_mut() {
                if cursor.emitted < cursor.count {
                    let timestamp = cursor.day + TimeDelta::minutes(i64::from(cursor.emitted));
                    cursor.emitted += 1;
                    let message = messages::pick(&mut self.rng, timestamp);
                    return Some(CommitEvent { timestamp, message });
                }
                self.current = None;
            }

            let day = self.schedule.window.day(self.next_day)?;
            self.next_day += 1;

            if !self.schedule.participation.participates(day, &mut self.rng) {
                continue;
            }

            let count = self.schedule.volume.draw(&mut self.rng);
            debug!(day = %day.date(), count, "day participates");
            self.current = Some(DayCursor {
                day,
                count,
                emitted: 0,
            });
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::messages::CATALOG;
    use crate::random::RngSource;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;

    fn today_strategy() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
    }

    fn group_by_day(events: &[CommitEvent]) -> BTreeMap<NaiveDate, Vec<NaiveDateTime>> {
        let mut days: BTreeMap<NaiveDate, Vec<NaiveDateTime>> = BTreeMap::new();
        for e in events {
            days.entry(e.timestamp.date()).or_default().push(e.timestamp);
        }
        days
    }

    proptest! {
        /// Property: the window has exactly days_before + days_after days
        #[test]
        fn prop_candidate_day_count(
            today in today_strategy(),
            before in 0u32..400,
            after in 0u32..400,
        ) {
            let window = ScheduleWindow::new(today, before, after).expect("window");
            prop_assert_eq!(window.candidate_days().count() as u64, u64::from(before + after));
        }

        /// Property: frequency 0 never produces an event
        #[test]
        fn prop_zero_frequency_is_silent(
            today in today_strategy(),
            before in 0u32..120,
            after in 0u32..30,
            no_weekends in any::<bool>(),
            max in -5i64..50,
            seed in any::<u64>(),
        ) {
            let window = ScheduleWindow::new(today, before, after).expect("window");
            let schedule = Schedule::new(
                window,
                ParticipationPolicy::new(no_weekends, 0),
                VolumePolicy::new(max),
            );
            let rng = RngSource::new(StdRng::seed_from_u64(seed));
            prop_assert_eq!(schedule.events(rng).count(), 0);
        }

        /// Property: frequency 100 gives every non-excluded day at least one event
        #[test]
        fn prop_full_frequency_covers_every_day(
            today in today_strategy(),
            before in 0u32..120,
            after in 0u32..30,
            no_weekends in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let window = ScheduleWindow::new(today, before, after).expect("window");
            let participation = ParticipationPolicy::new(no_weekends, 100);
            let schedule = Schedule::new(window, participation, VolumePolicy::new(3));
            let rng = RngSource::new(StdRng::seed_from_u64(seed));
            let events: Vec<_> = schedule.events(rng).collect();
            let days = group_by_day(&events);

            for day in window.candidate_days() {
                let covered = days.contains_key(&day.date());
                prop_assert_eq!(covered, !participation.is_excluded(day));
            }
        }

        /// Property: no event lands on a weekend when weekends are excluded
        #[test]
        fn prop_no_weekend_events(
            today in today_strategy(),
            before in 0u32..120,
            frequency in 0i64..=100,
            seed in any::<u64>(),
        ) {
            let window = ScheduleWindow::new(today, before, 0).expect("window");
            let schedule = Schedule::new(
                window,
                ParticipationPolicy::new(true, frequency),
                VolumePolicy::new(7),
            );
            let rng = RngSource::new(StdRng::seed_from_u64(seed));
            for event in schedule.events(rng) {
                prop_assert!(event.timestamp.weekday().num_days_from_monday() < 5);
            }
        }

        /// Property: per-day volume respects the clamped bounds
        #[test]
        fn prop_volume_within_clamp(
            today in today_strategy(),
            requested in prop_oneof![Just(-10i64), Just(0i64), Just(500i64), -50i64..60],
            seed in any::<u64>(),
        ) {
            let window = ScheduleWindow::new(today, 60, 0).expect("window");
            let volume = VolumePolicy::new(requested);
            let schedule = Schedule::new(window, ParticipationPolicy::new(false, 100), volume);
            let rng = RngSource::new(StdRng::seed_from_u64(seed));
            let events: Vec<_> = schedule.events(rng).collect();

            for stamps in group_by_day(&events).values() {
                prop_assert!(!stamps.is_empty());
                prop_assert!(stamps.len() <= usize::from(MAX_COMMITS_CEILING));
                if requested <= 1 {
                    prop_assert_eq!(stamps.len(), 1);
                } else {
                    prop_assert!(stamps.len() as i64 <= requested);
                }
            }
        }

        /// Property: a day's events start at the anchor and step by one minute
        #[test]
        fn prop_one_minute_spacing(
            today in today_strategy(),
            seed in any::<u64>(),
        ) {
            let window = ScheduleWindow::new(today, 30, 5).expect("window");
            let schedule = Schedule::new(
                window,
                ParticipationPolicy::new(false, 70),
                VolumePolicy::new(20),
            );
            let rng = RngSource::new(StdRng::seed_from_u64(seed));
            let events: Vec<_> = schedule.events(rng).collect();

            for window_pair in events.windows(2) {
                prop_assert!(window_pair[0].timestamp < window_pair[1].timestamp);
            }
            for (date, stamps) in group_by_day(&events) {
                for (m, stamp) in stamps.iter().enumerate() {
                    prop_assert_eq!(*stamp, anchor_for(date) + TimeDelta::minutes(m as i64));
                }
            }
        }

        /// Property: every message comes from the catalog with the event's minute
        #[test]
        fn prop_messages_from_catalog(
            today in today_strategy(),
            seed in any::<u64>(),
        ) {
            let window = ScheduleWindow::new(today, 20, 0).expect("window");
            let schedule = Schedule::new(
                window,
                ParticipationPolicy::new(false, 100),
                VolumePolicy::new(4),
            );
            let rng = RngSource::new(StdRng::seed_from_u64(seed));
            for event in schedule.events(rng) {
                let suffix = format!(" - {}", event.timestamp.format("%Y-%m-%d %H:%M"));
                prop_assert!(event.message.ends_with(&suffix));
                let prefix = &event.message[..event.message.len() - suffix.len()];
                prop_assert!(CATALOG.contains(&prefix));
            }
        }
    }
}
