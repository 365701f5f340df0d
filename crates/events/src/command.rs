use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An untyped command: a `type` discriminator plus a flat, caller-supplied field map.
///
/// Commands represent **intent**, a request to perform an action. They are not
/// validated on construction; the dispatcher checks them against the contract
/// registered for their type and only then turns them into events.
///
/// ## Decoding
///
/// Any JSON value decodes into a `Command`. Extra, missing or mistyped fields are
/// kept as-is so validation can report them. A `type` that is absent decodes to an
/// empty type name, and a non-string `type` decodes to its JSON text; neither is
/// ever registered, so both end up as "unknown command type".
///
/// ## Wire shape
///
/// ```text
/// {"type": "RegisterUser", "UserId": "...", "UserName": "Ada", ...}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct Command {
    command_type: String,
    fields: Map<String, Value>,
}

impl Command {
    /// Key carrying the command type on the wire.
    pub const TYPE_KEY: &'static str = "type";

    pub fn new(command_type: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            command_type: command_type.into(),
            fields,
        }
    }

    pub fn command_type(&self) -> &str {
        &self.command_type
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The full wire object, `type` included.
    pub fn to_json(&self) -> Value {
        Value::from(self.clone())
    }

    fn with_fields<const N: usize>(command_type: &str, fields: [(&str, Value); N]) -> Self {
        Self::new(
            command_type,
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

impl From<Value> for Command {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let command_type = match fields.remove(Command::TYPE_KEY) {
                    Some(Value::String(s)) => s,
                    Some(other) => other.to_string(),
                    None => String::new(),
                };
                Self {
                    command_type,
                    fields,
                }
            }
            _ => Self {
                command_type: String::new(),
                fields: Map::new(),
            },
        }
    }
}

impl From<Command> for Value {
    fn from(command: Command) -> Self {
        let mut object = command.fields;
        object.insert(
            Command::TYPE_KEY.to_string(),
            Value::String(command.command_type),
        );
        Value::Object(object)
    }
}

fn text(value: impl Into<String>) -> Value {
    Value::String(value.into())
}

fn list<I, S>(values: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Array(values.into_iter().map(text).collect())
}

/// Convenience constructors, one per command type.
///
/// These only assemble the field map; nothing is validated here.
impl Command {
    pub fn register_user(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        user_type: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "RegisterUser",
            [
                ("UserId", text(user_id)),
                ("UserName", text(user_name)),
                ("UserType", text(user_type)),
                ("Email", text(email)),
                ("Password", text(password)),
            ],
        )
    }

    pub fn create_talent_search(
        user_id: impl Into<String>,
        search_criteria: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "CreateTalentSearch",
            [
                ("UserId", text(user_id)),
                ("SearchCriteria", text(search_criteria)),
            ],
        )
    }

    pub fn upload_talent_video<S: Into<String>>(
        user_id: impl Into<String>,
        video_id: impl Into<String>,
        video_title: impl Into<String>,
        video_description: impl Into<String>,
        skills: impl IntoIterator<Item = S>,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::with_fields(
            "UploadTalentVideo",
            [
                ("UserId", text(user_id)),
                ("VideoId", text(video_id)),
                ("VideoTitle", text(video_title)),
                ("VideoDescription", text(video_description)),
                ("Skills", list(skills)),
                ("Categories", list(categories)),
            ],
        )
    }

    pub fn create_call_for_talent_video(
        user_id: impl Into<String>,
        call_id: impl Into<String>,
        call_criteria: impl Into<String>,
        deadline: impl Into<String>,
        video_title: impl Into<String>,
        video_description: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "CreateCallForTalentVideo",
            [
                ("UserId", text(user_id)),
                ("CallId", text(call_id)),
                ("CallCriteria", text(call_criteria)),
                ("Deadline", text(deadline)),
                ("VideoTitle", text(video_title)),
                ("VideoDescription", text(video_description)),
            ],
        )
    }

    pub fn submit_video_for_call(
        user_id: impl Into<String>,
        video_id: impl Into<String>,
        call_id: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "SubmitVideoForCall",
            [
                ("UserId", text(user_id)),
                ("VideoId", text(video_id)),
                ("CallId", text(call_id)),
            ],
        )
    }

    pub fn select_featured_videos<S: Into<String>>(
        user_id: impl Into<String>,
        call_id: impl Into<String>,
        selected_video_ids: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::with_fields(
            "SelectFeaturedVideos",
            [
                ("UserId", text(user_id)),
                ("CallId", text(call_id)),
                ("SelectedVideoIds", list(selected_video_ids)),
            ],
        )
    }

    pub fn create_talent_playlist(
        user_id: impl Into<String>,
        playlist_id: impl Into<String>,
        playlist_name: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "CreateTalentPlaylist",
            [
                ("UserId", text(user_id)),
                ("PlaylistId", text(playlist_id)),
                ("PlaylistName", text(playlist_name)),
            ],
        )
    }

    pub fn add_video_to_playlist(
        user_id: impl Into<String>,
        playlist_id: impl Into<String>,
        video_id: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "AddVideoToPlaylist",
            [
                ("UserId", text(user_id)),
                ("PlaylistId", text(playlist_id)),
                ("VideoId", text(video_id)),
            ],
        )
    }

    pub fn remove_video_from_playlist(
        user_id: impl Into<String>,
        playlist_id: impl Into<String>,
        video_id: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "RemoveVideoFromPlaylist",
            [
                ("UserId", text(user_id)),
                ("PlaylistId", text(playlist_id)),
                ("VideoId", text(video_id)),
            ],
        )
    }

    pub fn create_match(
        user_id: impl Into<String>,
        target_user_id: impl Into<String>,
        match_type: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "CreateMatch",
            [
                ("UserId", text(user_id)),
                ("TargetUserId", text(target_user_id)),
                ("MatchType", text(match_type)),
            ],
        )
    }

    pub fn propose_collaboration(
        user_id: impl Into<String>,
        target_user_id: impl Into<String>,
        proposal_details: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "ProposeCollaboration",
            [
                ("UserId", text(user_id)),
                ("TargetUserId", text(target_user_id)),
                ("ProposalDetails", text(proposal_details)),
            ],
        )
    }

    pub fn respond_to_collaboration_proposal(
        user_id: impl Into<String>,
        proposal_id: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self::with_fields(
            "RespondToCollaborationProposal",
            [
                ("UserId", text(user_id)),
                ("ProposalId", text(proposal_id)),
                ("Response", text(response)),
            ],
        )
    }

    pub fn delete_user_account(user_id: impl Into<String>) -> Self {
        Self::with_fields("DeleteUserAccount", [("UserId", text(user_id))])
    }

    pub fn unmatch_users(user_id: impl Into<String>, target_user_id: impl Into<String>) -> Self {
        Self::with_fields(
            "UnmatchUsers",
            [
                ("UserId", text(user_id)),
                ("TargetUserId", text(target_user_id)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_splits_type_from_fields() {
        let cmd: Command = serde_json::from_value(json!({
            "type": "DeleteUserAccount",
            "UserId": "abc",
            "Extra": 42,
        }))
        .unwrap();

        assert_eq!(cmd.command_type(), "DeleteUserAccount");
        assert_eq!(cmd.field("UserId"), Some(&json!("abc")));
        assert_eq!(cmd.field("Extra"), Some(&json!(42)));
        assert!(cmd.field("type").is_none());
    }

    #[test]
    fn decode_tolerates_missing_or_odd_type() {
        let missing = Command::from(json!({"UserId": "abc"}));
        assert_eq!(missing.command_type(), "");

        let numeric = Command::from(json!({"type": 7}));
        assert_eq!(numeric.command_type(), "7");

        let not_an_object = Command::from(json!(["RegisterUser"]));
        assert_eq!(not_an_object.command_type(), "");
        assert!(not_an_object.fields().is_empty());
    }

    #[test]
    fn encodes_flat_with_type() {
        let cmd = Command::unmatch_users("a", "b");
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"type": "UnmatchUsers", "UserId": "a", "TargetUserId": "b"})
        );
    }

    #[test]
    fn list_constructors_keep_element_order() {
        let cmd = Command::upload_talent_video("u", "v", "t", "d", ["go", "rust"], ["dev"]);
        assert_eq!(cmd.field("Skills"), Some(&json!(["go", "rust"])));
        assert_eq!(cmd.field("Categories"), Some(&json!(["dev"])));
    }

    #[test]
    fn constructors_do_not_validate() {
        let cmd = Command::register_user("", "", "Nobody", "not-an-email", "x");
        assert_eq!(cmd.command_type(), "RegisterUser");
        assert_eq!(cmd.fields().len(), 5);
    }
}
