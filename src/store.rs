//! The session-local user list. This is the only authority for user records;
//! nothing here touches disk or network.

use crate::error::Result;
use crate::types::{User, UserDraft};

#[derive(Debug, Default)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Wholesale replacement, used when the initial fetch lands.
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// The id the next added record will get: one past the current maximum.
    /// Deleting the highest-id record and re-adding reuses its id.
    pub fn next_id(&self) -> u64 {
        self.users.iter().map(|u| u.id).max().map_or(1, |id| id + 1)
    }

    /// Validate the draft, assign the next id, and append. Returns the new
    /// record's id. A draft with any empty field leaves the list untouched.
    pub fn add(&mut self, draft: &UserDraft) -> Result<u64> {
        draft.validate()?;
        let id = self.next_id();
        self.users.push(User {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            department: draft.department.clone(),
        });
        Ok(id)
    }

    /// Replace the fields of the record with the given id. No existence
    /// check: an unknown id leaves the list unchanged.
    pub fn update(&mut self, id: u64, draft: &UserDraft) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
            user.first_name = draft.first_name.clone();
            user.last_name = draft.last_name.clone();
            user.email = draft.email.clone();
            user.department = draft.department.clone();
        }
    }

    /// Remove the record with the given id, if present. No confirmation.
    pub fn remove(&mut self, id: u64) {
        self.users.retain(|u| u.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, last: &str, email: &str, department: &str) -> UserDraft {
        UserDraft {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        }
    }

    fn seeded() -> Roster {
        let mut roster = Roster::new();
        roster
            .add(&draft("Jane", "Doe", "j@d.com", "General"))
            .unwrap();
        roster
            .add(&draft("Ervin", "Howell", "e@h.com", "Sales"))
            .unwrap();
        roster
    }

    #[test]
    fn ids_are_strictly_increasing_and_unique() {
        let mut roster = Roster::new();
        let mut ids = Vec::new();
        for i in 0..10 {
            let name = format!("User{i}");
            ids.push(
                roster
                    .add(&draft(&name, "Test", "u@t.com", "QA"))
                    .unwrap(),
            );
        }
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn first_id_on_empty_store_is_one() {
        let mut roster = Roster::new();
        let id = roster.add(&draft("A", "B", "a@b.com", "X")).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn add_after_two_records_gets_id_three() {
        let mut roster = seeded();
        let id = roster.add(&draft("A", "B", "a@b.com", "X")).unwrap();
        assert_eq!(id, 3);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn add_with_empty_field_leaves_store_unchanged() {
        let mut roster = seeded();
        let before: Vec<User> = roster.users().to_vec();
        let result = roster.add(&draft("A", "", "a@b.com", "X"));
        assert!(result.is_err());
        assert_eq!(roster.users(), &before[..]);
    }

    #[test]
    fn update_replaces_exactly_the_matching_record() {
        let mut roster = seeded();
        roster.update(1, &draft("Janet", "Doe", "janet@d.com", "Support"));
        assert_eq!(roster.users()[0].first_name, "Janet");
        assert_eq!(roster.users()[0].id, 1);
        assert_eq!(roster.users()[1].first_name, "Ervin");
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let mut roster = seeded();
        let before: Vec<User> = roster.users().to_vec();
        roster.update(99, &draft("A", "B", "a@b.com", "X"));
        assert_eq!(roster.users(), &before[..]);
    }

    #[test]
    fn remove_deletes_one_record_and_keeps_order() {
        let mut roster = seeded();
        roster
            .add(&draft("Clementine", "Bauch", "c@b.com", "Legal"))
            .unwrap();
        roster.remove(2);
        let ids: Vec<u64> = roster.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut roster = seeded();
        roster.remove(42);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn deleting_the_highest_id_reuses_it_on_next_add() {
        let mut roster = seeded();
        roster.remove(2);
        let id = roster.add(&draft("A", "B", "a@b.com", "X")).unwrap();
        assert_eq!(id, 2);
    }
}
