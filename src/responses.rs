//! Payload types returned by the seed directory API.

use serde::Deserialize;

/// One entry of the remote user directory. The endpoint returns a bare JSON
/// array of these; any extra fields the demo API sends are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct RemoteUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_entry() {
        let user: RemoteUser =
            serde_json::from_str(r#"{"id": 7, "name": "Jane Doe", "email": "j@d.com"}"#).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "j@d.com");
    }

    #[test]
    fn ignores_extra_fields() {
        let payload = r#"[{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"street": "Kulas Light", "city": "Gwenborough"},
            "phone": "1-770-736-8031",
            "website": "hildegard.org"
        }]"#;
        let users: Vec<RemoteUser> = serde_json::from_str(payload).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Leanne Graham");
    }
}
