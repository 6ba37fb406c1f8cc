use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Subject;
use crate::attendance::{AttendanceRecord, FineSchedule, MinutesRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Member,
}

/// A study group. The owner is always its first member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub owner_email: String,
    pub members: Vec<User>,
    #[serde(default)]
    pub subjects_by_email: BTreeMap<String, Vec<Subject>>,
    #[serde(default)]
    pub attendance_by_email: BTreeMap<String, AttendanceRecord>,
    /// Actual minutes per recorded day, keyed like `attendance_by_email`.
    #[serde(default)]
    pub minutes_by_email: BTreeMap<String, MinutesRecord>,
    #[serde(default)]
    pub fines: FineSchedule,
}

impl Group {
    pub(crate) fn new(name: String, owner: &User) -> Self {
        let mut group = Self {
            id: format!("group_{}", Uuid::new_v4().simple()),
            name,
            owner_email: owner.email.clone(),
            members: Vec::new(),
            subjects_by_email: BTreeMap::new(),
            attendance_by_email: BTreeMap::new(),
            minutes_by_email: BTreeMap::new(),
            fines: FineSchedule::default(),
        };
        group.add_member(owner);
        group
    }

    pub fn is_member(&self, email: &str) -> bool {
        self.members.iter().any(|m| m.email == email)
    }

    pub fn role_of(&self, email: &str) -> Option<Role> {
        if self.owner_email == email {
            Some(Role::Owner)
        } else if self.is_member(email) {
            Some(Role::Member)
        } else {
            None
        }
    }

    /// Adds `user` unless already present. Returns whether it was added.
    pub(crate) fn add_member(&mut self, user: &User) -> bool {
        let added = if self.is_member(&user.email) {
            false
        } else {
            self.members.push(user.clone());
            true
        };
        self.subjects_by_email.entry(user.email.clone()).or_default();
        self.attendance_by_email.entry(user.email.clone()).or_default();
        self.minutes_by_email.entry(user.email.clone()).or_default();
        added
    }
}

/// One row of the group list as seen by the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: String,
    pub name: String,
    pub member_count: usize,
    pub role: Option<Role>,
    pub joined: bool,
}

impl GroupSummary {
    pub(crate) fn of(group: &Group, email: &str) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            member_count: group.members.len(),
            role: group.role_of(email),
            joined: group.is_member(email),
        }
    }
}

/// A member with their role in the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberView {
    #[serde(flatten)]
    pub user: User,
    pub role: Role,
}
