use serde::{Deserialize, Serialize};

use crate::responses::RemoteUser;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl User {
    /// Build a record from a directory API entry. The remote `name` is a
    /// single field; it splits on the first space, with the remainder (which
    /// may itself contain spaces) becoming the last name.
    pub fn from_remote(remote: RemoteUser, department: &str) -> Self {
        let (first_name, last_name) = split_name(&remote.name);
        Self {
            id: remote.id,
            first_name,
            last_name,
            email: remote.email,
            department: department.to_string(),
        }
    }
}

/// Split a full name on the first space. A name without a space yields an
/// empty last name.
pub fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (name.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_space() {
        assert_eq!(
            split_name("Jane Doe"),
            ("Jane".to_string(), "Doe".to_string())
        );
        assert_eq!(
            split_name("Ervin Howell Jr"),
            ("Ervin".to_string(), "Howell Jr".to_string())
        );
    }

    #[test]
    fn single_word_name_has_empty_last_name() {
        assert_eq!(split_name("Cher"), ("Cher".to_string(), String::new()));
    }

    #[test]
    fn maps_remote_entry_with_default_department() {
        let remote = RemoteUser {
            id: 7,
            name: "Jane Doe".to_string(),
            email: "j@d.com".to_string(),
        };
        let user = User::from_remote(remote, "General");
        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.email, "j@d.com");
        assert_eq!(user.department, "General");
    }
}
