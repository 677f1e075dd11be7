use super::*;

fn user(nickname: &str) -> UserInfo {
    UserInfo {
        id: 1,
        username: "alice".to_owned(),
        nickname: nickname.to_owned(),
        avatar: String::new(),
        roles: Vec::new(),
    }
}

#[test]
fn display_name_prefers_nickname() {
    assert_eq!(display_name(&user("Ally")), "Ally");
}

#[test]
fn display_name_falls_back_to_username() {
    assert_eq!(display_name(&user("")), "alice");
    assert_eq!(display_name(&user("   ")), "alice");
}

#[test]
fn roles_label_joins_roles() {
    assert_eq!(roles_label(&["admin".to_owned(), "user".to_owned()]), "admin, user");
}

#[test]
fn roles_label_handles_no_roles() {
    assert_eq!(roles_label(&[]), "no roles");
}
