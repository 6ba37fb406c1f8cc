//! Application state: the whole persisted snapshot.
//!
//! Every operation takes `&mut AppState` (or `&AppState`) explicitly; there
//! is no global. Inputs are validated before anything is mutated, so an
//! `Err` always leaves the state untouched.

mod group;
mod input;
mod subject;

pub use group::{Group, GroupSummary, MemberView, Role, User};
pub use input::{parse_count, require_text};
pub use subject::{Subject, SubjectDraft};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::attendance::{
    classify, monthly_settlement, rank_members, AttendanceRecord, FineSchedule, MemberStats,
    MonthlySettlement, PageProgress, RankingRow,
};
use crate::error::{PreconditionError, Result};
use crate::events::Event;
use crate::goals::{allocate, GoalAllocation};
use crate::timer::TimerState;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub current_user: Option<User>,
    /// Newest first.
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub active_group_id: Option<String>,
    /// Timer per group id.
    #[serde(default)]
    pub timers: BTreeMap<String, TimerState>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Session ──────────────────────────────────────────────────────

    pub fn login(&mut self, email: &str, name: &str) -> Result<&User> {
        let email = require_text("email", email)?;
        let name = require_text("name", name)?;
        info!(%email, "logged in");
        Ok(self.current_user.insert(User { email, name }))
    }

    pub fn logout(&mut self) {
        self.current_user = None;
        self.active_group_id = None;
    }

    pub fn current_user(&self) -> Result<&User, PreconditionError> {
        self.current_user.as_ref().ok_or(PreconditionError::NotLoggedIn)
    }

    // ── Groups ───────────────────────────────────────────────────────

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    fn group_mut(&mut self, group_id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    pub fn create_group(&mut self, name: &str) -> Result<Event> {
        let user = self.current_user()?.clone();
        let name = require_text("group name", name)?;
        let group = Group::new(name, &user);
        let event = Event::GroupCreated {
            group_id: group.id.clone(),
            name: group.name.clone(),
        };
        self.timers.entry(group.id.clone()).or_default();
        info!(group_id = %group.id, owner = %user.email, "group created");
        self.groups.insert(0, group);
        Ok(event)
    }

    pub fn join_group(&mut self, group_id: &str) -> Result<Event> {
        let user = self.current_user()?.clone();
        let group_id = require_text("group id", group_id)?;
        let group = self
            .group_mut(&group_id)
            .ok_or_else(|| PreconditionError::GroupNotFound(group_id.clone()))?;
        let newly_joined = group.add_member(&user);
        self.timers.entry(group_id.clone()).or_default();
        if newly_joined {
            info!(%group_id, email = %user.email, "joined group");
        }
        Ok(Event::GroupJoined {
            group_id,
            email: user.email,
            newly_joined,
        })
    }

    /// Owner-only. Unknown ids are ignored.
    pub fn delete_group(&mut self, group_id: &str) -> Result<Option<Event>> {
        let email = self.current_user()?.email.clone();
        let Some(group) = self.group(group_id) else {
            return Ok(None);
        };
        if group.owner_email != email {
            return Err(PreconditionError::NotOwner(group_id.to_string()).into());
        }
        self.groups.retain(|g| g.id != group_id);
        self.timers.remove(group_id);
        if self.active_group_id.as_deref() == Some(group_id) {
            self.active_group_id = None;
        }
        info!(%group_id, "group deleted");
        Ok(Some(Event::GroupDeleted {
            group_id: group_id.to_string(),
        }))
    }

    pub fn enter_group(&mut self, group_id: &str) -> Result<&Group> {
        let email = self.current_user()?.email.clone();
        let group = self
            .group(group_id)
            .ok_or_else(|| PreconditionError::GroupNotFound(group_id.to_string()))?;
        if !group.is_member(&email) {
            return Err(PreconditionError::NotMember(group_id.to_string()).into());
        }
        self.active_group_id = Some(group_id.to_string());
        self.timers.entry(group_id.to_string()).or_default();
        self.active_group().map_err(Into::into)
    }

    pub fn leave_group(&mut self) {
        self.active_group_id = None;
    }

    pub fn active_group(&self) -> Result<&Group, PreconditionError> {
        let id = self
            .active_group_id
            .as_deref()
            .ok_or(PreconditionError::NoActiveGroup)?;
        self.group(id)
            .ok_or_else(|| PreconditionError::GroupNotFound(id.to_string()))
    }

    /// Active group and current user's email, both required.
    fn active_context(&self) -> Result<(&Group, &str), PreconditionError> {
        let email = self.current_user()?.email.as_str();
        Ok((self.active_group()?, email))
    }

    fn active_group_mut(&mut self) -> Result<(&mut Group, String), PreconditionError> {
        let email = self.current_user()?.email.clone();
        let id = self
            .active_group_id
            .clone()
            .ok_or(PreconditionError::NoActiveGroup)?;
        let group = self
            .group_mut(&id)
            .ok_or(PreconditionError::GroupNotFound(id))?;
        Ok((group, email))
    }

    pub fn group_summaries(&self) -> Result<Vec<GroupSummary>, PreconditionError> {
        let email = &self.current_user()?.email;
        Ok(self
            .groups
            .iter()
            .map(|g| GroupSummary::of(g, email))
            .collect())
    }

    pub fn members(&self) -> Result<Vec<MemberView>, PreconditionError> {
        let group = self.active_group()?;
        Ok(group
            .members
            .iter()
            .map(|m| MemberView {
                user: m.clone(),
                role: group.role_of(&m.email).unwrap_or(Role::Member),
            })
            .collect())
    }

    // ── Subjects ─────────────────────────────────────────────────────

    pub fn subjects(&self) -> Result<&[Subject], PreconditionError> {
        let (group, email) = self.active_context()?;
        Ok(group
            .subjects_by_email
            .get(email)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    pub fn add_subject(&mut self, draft: &SubjectDraft) -> Result<(Event, Subject)> {
        let subject = draft.validate()?;
        let (group, email) = self.active_group_mut()?;
        let list = group.subjects_by_email.entry(email).or_default();
        list.push(subject.clone());
        info!(group_id = %group.id, subject = %subject.name, "subject added");
        let event = Event::SubjectAdded {
            group_id: group.id.clone(),
            name: subject.name.clone(),
            index: list.len() - 1,
        };
        Ok((event, subject))
    }

    pub fn remove_subject(&mut self, index: usize) -> Result<Event> {
        let (group, email) = self.active_group_mut()?;
        let list = group.subjects_by_email.entry(email).or_default();
        if index >= list.len() {
            return Err(PreconditionError::SubjectIndexOutOfRange {
                index,
                len: list.len(),
            }
            .into());
        }
        let removed = list.remove(index);
        info!(group_id = %group.id, subject = %removed.name, "subject removed");
        Ok(Event::SubjectRemoved {
            group_id: group.id.clone(),
            name: removed.name,
        })
    }

    pub fn generate_goals(&self, total_minutes: i64) -> Result<Vec<GoalAllocation>> {
        Ok(allocate(self.subjects()?, total_minutes)?)
    }

    // ── Attendance ───────────────────────────────────────────────────

    pub fn attendance(&self) -> Result<AttendanceRecord, PreconditionError> {
        let (group, email) = self.active_context()?;
        Ok(group
            .attendance_by_email
            .get(email)
            .cloned()
            .unwrap_or_default())
    }

    /// Classify the day and overwrite the mark for `date`.
    pub fn save_attendance(
        &mut self,
        date: NaiveDate,
        goal_minutes: u32,
        actual_minutes: u32,
        pages: &PageProgress,
    ) -> Result<Event> {
        let mark = classify(goal_minutes, actual_minutes, pages);
        let (group, email) = self.active_group_mut()?;
        group
            .minutes_by_email
            .entry(email.clone())
            .or_default()
            .insert(date, actual_minutes);
        let previous = group
            .attendance_by_email
            .entry(email)
            .or_default()
            .insert(date, mark);
        info!(group_id = %group.id, %date, %mark, "attendance saved");
        Ok(Event::AttendanceMarked {
            group_id: group.id.clone(),
            date,
            mark,
            previous,
        })
    }

    /// Current user's mark counts and fine for one month, using the active
    /// group's schedule.
    pub fn monthly_settlement(
        &self,
        year: i32,
        month: u32,
    ) -> Result<MonthlySettlement, PreconditionError> {
        let (group, email) = self.active_context()?;
        let empty = AttendanceRecord::new();
        let record = group.attendance_by_email.get(email).unwrap_or(&empty);
        Ok(monthly_settlement(record, year, month, &group.fines))
    }

    /// Owner-only. Replaces the active group's fine schedule.
    pub fn set_fines(&mut self, partial: u64, absent: u64) -> Result<Event> {
        let (group, email) = self.active_group_mut()?;
        if group.owner_email != email {
            return Err(PreconditionError::NotOwner(group.id.clone()).into());
        }
        group.fines = FineSchedule { partial, absent };
        info!(group_id = %group.id, partial, absent, "fines updated");
        Ok(Event::FinesUpdated {
            group_id: group.id.clone(),
            partial,
            absent,
        })
    }

    /// Every member of the active group, ranked. Members only.
    pub fn ranking(&self) -> Result<Vec<RankingRow>, PreconditionError> {
        let (group, email) = self.active_context()?;
        if !group.is_member(email) {
            return Err(PreconditionError::NotMember(group.id.clone()));
        }
        let stats = group
            .members
            .iter()
            .map(|m| {
                MemberStats::collect(
                    &m.email,
                    &m.name,
                    group.attendance_by_email.get(&m.email),
                    group.minutes_by_email.get(&m.email),
                )
            })
            .collect();
        Ok(rank_members(stats))
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn timer(&self) -> Result<TimerState, PreconditionError> {
        let group = self.active_group()?;
        Ok(self.timers.get(&group.id).cloned().unwrap_or_default())
    }

    fn timer_mut(&mut self) -> Result<&mut TimerState, PreconditionError> {
        let id = self.active_group()?.id.clone();
        Ok(self.timers.entry(id).or_default())
    }

    pub fn timer_start(&mut self, now_ms: u64) -> Result<Option<Event>, PreconditionError> {
        Ok(self.timer_mut()?.start(now_ms))
    }

    pub fn timer_stop(&mut self, now_ms: u64) -> Result<Option<Event>, PreconditionError> {
        Ok(self.timer_mut()?.stop(now_ms))
    }

    pub fn timer_reset(&mut self) -> Result<Option<Event>, PreconditionError> {
        Ok(self.timer_mut()?.reset())
    }

    pub fn timer_elapsed(&self, now_ms: u64) -> Result<u64, PreconditionError> {
        Ok(self.timer()?.elapsed(now_ms))
    }
}
