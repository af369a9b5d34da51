use crate::domain::{Member, MemberHandle};
use crate::ports::member_repository::MemberRepository;
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory member registry (MembersManager)
///
/// Members are registered at construction and live for the whole process.
pub struct MemberRegistry {
    members: Vec<MemberHandle>,
}

impl MemberRegistry {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members: members
                .into_iter()
                .map(|member| Arc::new(Mutex::new(member)))
                .collect(),
        }
    }

    /// Snapshot of every member, in registration order
    ///
    /// Borrowed lists in the snapshot still point at the live catalog items.
    pub fn members(&self) -> Vec<Member> {
        self.members
            .iter()
            .map(|member| {
                member
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone()
            })
            .collect()
    }
}

impl MemberRepository for MemberRegistry {
    /// Linear scan, first exact name match wins
    fn check_availability(&self, name: &str) -> Option<MemberHandle> {
        self.members
            .iter()
            .find(|member| member.lock().unwrap_or_else(PoisonError::into_inner).name == name)
            .cloned()
    }
}
