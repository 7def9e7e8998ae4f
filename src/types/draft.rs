use crate::error::{Result, RosterError};
use crate::types::User;

/// The four editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Department,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Department,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Department => "Department",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::FirstName => Field::LastName,
            Field::LastName => Field::Email,
            Field::Email => Field::Department,
            Field::Department => Field::FirstName,
        }
    }

    pub fn prev(self) -> Field {
        match self {
            Field::FirstName => Field::Department,
            Field::LastName => Field::FirstName,
            Field::Email => Field::LastName,
            Field::Department => Field::Email,
        }
    }
}

/// Transient form state: a mirror of a record's editable fields, alive only
/// while the modal is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Department => &self.department,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Department => &mut self.department,
        }
    }

    /// Presence check used by the Add commit: every field must contain
    /// something other than whitespace.
    pub fn validate(&self) -> Result<()> {
        let complete = Field::ALL
            .iter()
            .all(|field| !self.field(*field).trim().is_empty());
        if complete {
            Ok(())
        } else {
            Err(RosterError::MissingFields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> UserDraft {
        UserDraft {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            department: "X".to_string(),
        }
    }

    #[test]
    fn complete_draft_validates() {
        assert!(full_draft().validate().is_ok());
    }

    #[test]
    fn any_empty_field_fails_validation() {
        for field in Field::ALL {
            let mut draft = full_draft();
            draft.field_mut(field).clear();
            assert!(draft.validate().is_err(), "{} should be required", field.label());
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut draft = full_draft();
        draft.email = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn focus_order_wraps_both_ways() {
        let mut field = Field::FirstName;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, Field::FirstName);

        assert_eq!(Field::FirstName.prev(), Field::Department);
    }
}
