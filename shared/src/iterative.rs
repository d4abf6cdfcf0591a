//! Project iteration history: GitHub commits normalized into timeline
//! entries, plus the year selector and calendar grid next to them.

use std::{
    collections::{BTreeMap, HashSet},
    fmt::Display,
};

use chrono::{Datelike, Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::{PageState, time::format_rfc3339_in};

/// Commits fetched per project.
pub const COMMITS_PER_PROJECT: usize = 10;

/// Years offered by the year selector.
pub const YEAR_OPTIONS: usize = 10;

/// A repository whose history the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedProject {
    /// GitHub repository name.
    pub repo: &'static str,
    /// Column heading.
    pub title: &'static str,
    /// Session storage key of its cached timeline.
    pub cache_key: &'static str,
}

/// Projects shown on the page, in column order.
pub const TRACKED_PROJECTS: [TrackedProject; 3] = [
    TrackedProject {
        repo: "Thrive_Blog",
        title: "Thrive_Blog",
        cache_key: "blog_project_iterative",
    },
    TrackedProject {
        repo: "Thrive_Admin",
        title: "Thrive_Admin",
        cache_key: "admin_project_iterative",
    },
    TrackedProject {
        repo: "Thrive_Api_Py",
        title: "Thrive_Server",
        cache_key: "server_project_iterative",
    },
];

/// One item of the GitHub commits API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubCommit {
    /// Git commit payload.
    pub commit: CommitDetail,
}

/// Inner `commit` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetail {
    /// Author signature.
    pub author: CommitAuthor,
    /// Full commit message.
    pub message: String,
}

/// Author signature of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// RFC 3339 author date.
    pub date: String,
}

/// Timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterativeRecord {
    /// Formatted author time.
    pub label: String,
    /// Commit message.
    pub children: String,
}

impl IterativeRecord {
    /// `YYYY-MM-DD` part of the label.
    pub fn day(&self) -> Option<&str> {
        self.label.get(..10)
    }
}

/// Normalize commits in local time, preserving order.
pub fn normalize_commits(commits: &[GithubCommit]) -> Vec<IterativeRecord> {
    normalize_commits_in(commits, &Local)
}

/// Normalize commits with labels in `tz`. Dates GitHub sends in an
/// unexpected shape are shown raw.
pub fn normalize_commits_in<Tz>(commits: &[GithubCommit], tz: &Tz) -> Vec<IterativeRecord>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    commits
        .iter()
        .map(|item| IterativeRecord {
            label: format_rfc3339_in(&item.commit.author.date, tz)
                .unwrap_or_else(|| item.commit.author.date.clone()),
            children: item.commit.message.clone(),
        })
        .collect()
}

/// `current` and the years before it, newest first.
pub fn year_options(current: i32) -> Vec<i32> {
    (0..YEAR_OPTIONS as i32).map(|offset| current - offset).collect()
}

/// Sunday-first week columns covering `year`. Cells outside the year are
/// `None`.
pub fn calendar_weeks(year: i32) -> Vec<[Option<NaiveDate>; 7]> {
    let (Some(first), Some(last)) =
        (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31))
    else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_sunday() as usize;
    let mut day = first;
    loop {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        if day == last {
            break;
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    if slot != 0 {
        weeks.push(week);
    }
    weeks
}

/// Days (`YYYY-MM-DD`) on which any of `records` happened.
pub fn active_days<'a>(records: impl IntoIterator<Item = &'a IterativeRecord>) -> HashSet<String> {
    records
        .into_iter()
        .filter_map(IterativeRecord::day)
        .map(str::to_string)
        .collect()
}

/// Iterative page state.
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeState {
    /// Year shown by the calendar.
    pub year: i32,
    /// Options of the year selector.
    pub years: Vec<i32>,
    /// Loaded timelines keyed by repository.
    pub timelines: BTreeMap<&'static str, Vec<IterativeRecord>>,
    /// Repositories still loading.
    pub loading: HashSet<&'static str>,
    /// Load failures keyed by repository.
    pub errors: BTreeMap<&'static str, String>,
}

impl IterativeState {
    /// Fresh state for `current_year`, every project loading.
    pub fn new(current_year: i32) -> Self {
        Self {
            year: current_year,
            years: year_options(current_year),
            timelines: BTreeMap::new(),
            loading: TRACKED_PROJECTS.iter().map(|p| p.repo).collect(),
            errors: BTreeMap::new(),
        }
    }

    /// Timeline of `repo`, empty until loaded.
    pub fn timeline(&self, repo: &str) -> &[IterativeRecord] {
        self.timelines.get(repo).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Events applied to an [`IterativeState`].
#[derive(Debug, Clone, PartialEq)]
pub enum IterativeAction {
    /// Year selector changed.
    SetYear(i32),
    /// A project's timeline is ready.
    Loaded {
        /// Repository name.
        repo: &'static str,
        /// Normalized records.
        records: Vec<IterativeRecord>,
    },
    /// A project's timeline could not be loaded.
    Failed {
        /// Repository name.
        repo: &'static str,
        /// Error text.
        message: String,
    },
}

impl PageState for IterativeState {
    type Action = IterativeAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            IterativeAction::SetYear(year) => self.year = year,
            IterativeAction::Loaded {
                repo,
                records,
            } => {
                self.loading.remove(repo);
                self.errors.remove(repo);
                self.timelines.insert(repo, records);
            },
            IterativeAction::Failed {
                repo,
                message,
            } => {
                self.loading.remove(repo);
                self.errors.insert(repo, message);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn commit(date: &str, message: &str) -> GithubCommit {
        GithubCommit {
            commit: CommitDetail {
                author: CommitAuthor {
                    date: date.to_string(),
                },
                message: message.to_string(),
            },
        }
    }

    #[test]
    fn commits_normalize_in_order() {
        let records = normalize_commits_in(
            &[commit("2024-03-02T10:00:00Z", "feat: b"), commit("2024-03-01T09:00:00Z", "feat: a")],
            &Utc,
        );
        assert_eq!(records[0].label, "2024-03-02 10:00:00");
        assert_eq!(records[0].children, "feat: b");
        assert_eq!(records[1].day(), Some("2024-03-01"));
    }

    #[test]
    fn github_payload_parses() {
        let raw = r#"[{ "sha": "abc", "commit": { "author": { "name": "l", "date": "2024-03-02T10:00:00Z" }, "message": "init" } }]"#;
        let commits: Vec<GithubCommit> = serde_json::from_str(raw).expect("parse commits");
        assert_eq!(commits[0].commit.message, "init");
    }

    #[test]
    fn year_options_are_ten_descending_years() {
        let years = year_options(2026);
        assert_eq!(years.len(), 10);
        assert_eq!(years.first(), Some(&2026));
        assert_eq!(years.last(), Some(&2017));
    }

    #[test]
    fn calendar_covers_every_day_once() {
        let weeks = calendar_weeks(2024);
        let days: Vec<_> = weeks.iter().flatten().flatten().collect();
        assert_eq!(days.len(), 366);
        // 2024-01-01 was a Monday.
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn changing_year_keeps_timelines() {
        let mut state = IterativeState::new(2026);
        assert_eq!(state.loading.len(), 3);
        state.apply(IterativeAction::Loaded {
            repo: "Thrive_Blog",
            records: normalize_commits_in(&[commit("2026-01-01T00:00:00Z", "x")], &Utc),
        });
        state.apply(IterativeAction::SetYear(2020));
        assert_eq!(state.year, 2020);
        assert_eq!(state.timeline("Thrive_Blog").len(), 1);
        assert!(!state.loading.contains("Thrive_Blog"));
        assert!(active_days(state.timeline("Thrive_Blog")).contains("2026-01-01"));
    }

    #[test]
    fn every_project_has_its_own_cache_key() {
        let keys: HashSet<_> = TRACKED_PROJECTS.iter().map(|p| p.cache_key).collect();
        assert_eq!(keys.len(), TRACKED_PROJECTS.len());
    }
}
