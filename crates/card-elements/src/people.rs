//! People icon components referencing Microsoft Graph user records.

use serde::{Deserialize, Serialize};

pub const PEOPLE_ICON_USER: &str = "graph.microsoft.com/user";
pub const PEOPLE_ICON_USERS: &str = "graph.microsoft.com/users";
pub const PEOPLE_ICON_VIEW: &str = "compact";

/// Caller-side user record. Every field may be absent and is passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// The user triple as the Graph component expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
}

impl From<UserIdentity> for GraphUser {
    fn from(user: UserIdentity) -> Self {
        Self {
            id: user.id,
            display_name: user.name,
            user_principal_name: user.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PeopleIconProperties {
    User(GraphUser),
    Users { users: Vec<GraphUser> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Component")]
pub struct PeopleIcon {
    pub name: String,
    pub view: String,
    pub properties: PeopleIconProperties,
}

pub fn user_icon(user: UserIdentity) -> PeopleIcon {
    PeopleIcon {
        name: PEOPLE_ICON_USER.to_string(),
        view: PEOPLE_ICON_VIEW.to_string(),
        properties: PeopleIconProperties::User(user.into()),
    }
}

/// Keeps input order; duplicates are not collapsed.
pub fn user_icon_set<I>(users: I) -> PeopleIcon
where
    I: IntoIterator<Item = UserIdentity>,
{
    PeopleIcon {
        name: PEOPLE_ICON_USERS.to_string(),
        view: PEOPLE_ICON_VIEW.to_string(),
        properties: PeopleIconProperties::Users {
            users: users.into_iter().map(GraphUser::from).collect(),
        },
    }
}
