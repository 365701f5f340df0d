//! Typed command variants.
//!
//! A [`TypedCommand`] is what an untyped [`Command`] becomes once its fields have
//! passed the contract check: identifiers are parsed, enumerations are closed,
//! and deadlines are real timestamps. Parsed fields keep their source text
//! ([`Verbatim`]) so events repeat them exactly. Field names on the wire are
//! PascalCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use talentpitch_core::{
    CallId, MatchType, PlaylistId, ProposalId, ProposalResponse, UserId, UserType, Verbatim,
    VideoId,
};

use crate::command::Command;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterUser {
    pub user_id: Verbatim<UserId>,
    pub user_name: String,
    pub user_type: UserType,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTalentSearch {
    pub user_id: Verbatim<UserId>,
    pub search_criteria: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadTalentVideo {
    pub user_id: Verbatim<UserId>,
    pub video_id: Verbatim<VideoId>,
    pub video_title: String,
    pub video_description: String,
    pub skills: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCallForTalentVideo {
    pub user_id: Verbatim<UserId>,
    pub call_id: Verbatim<CallId>,
    pub call_criteria: String,
    pub deadline: Verbatim<DateTime<Utc>>,
    pub video_title: String,
    pub video_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitVideoForCall {
    pub user_id: Verbatim<UserId>,
    pub video_id: Verbatim<VideoId>,
    pub call_id: Verbatim<CallId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectFeaturedVideos {
    pub user_id: Verbatim<UserId>,
    pub call_id: Verbatim<CallId>,
    pub selected_video_ids: Vec<Verbatim<VideoId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTalentPlaylist {
    pub user_id: Verbatim<UserId>,
    pub playlist_id: Verbatim<PlaylistId>,
    pub playlist_name: String,
}

/// Shared shape of the add/remove playlist commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaylistVideo {
    pub user_id: Verbatim<UserId>,
    pub playlist_id: Verbatim<PlaylistId>,
    pub video_id: Verbatim<VideoId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMatch {
    pub user_id: Verbatim<UserId>,
    pub target_user_id: Verbatim<UserId>,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProposeCollaboration {
    pub user_id: Verbatim<UserId>,
    pub target_user_id: Verbatim<UserId>,
    pub proposal_details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RespondToCollaborationProposal {
    pub user_id: Verbatim<UserId>,
    pub proposal_id: Verbatim<ProposalId>,
    pub response: ProposalResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserAccount {
    pub user_id: Verbatim<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnmatchUsers {
    pub user_id: Verbatim<UserId>,
    pub target_user_id: Verbatim<UserId>,
}

/// Closed set of commands the engine knows how to turn into events.
///
/// Tagged by the wire `type`; unknown fields are ignored so extra input never
/// reaches an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypedCommand {
    RegisterUser(RegisterUser),
    CreateTalentSearch(CreateTalentSearch),
    UploadTalentVideo(UploadTalentVideo),
    CreateCallForTalentVideo(CreateCallForTalentVideo),
    SubmitVideoForCall(SubmitVideoForCall),
    SelectFeaturedVideos(SelectFeaturedVideos),
    CreateTalentPlaylist(CreateTalentPlaylist),
    AddVideoToPlaylist(PlaylistVideo),
    RemoveVideoFromPlaylist(PlaylistVideo),
    CreateMatch(CreateMatch),
    ProposeCollaboration(ProposeCollaboration),
    RespondToCollaborationProposal(RespondToCollaborationProposal),
    DeleteUserAccount(DeleteUserAccount),
    UnmatchUsers(UnmatchUsers),
}

impl TypedCommand {
    /// Every command type name, in declaration order.
    pub const TYPE_NAMES: &'static [&'static str] = &[
        "RegisterUser",
        "CreateTalentSearch",
        "UploadTalentVideo",
        "CreateCallForTalentVideo",
        "SubmitVideoForCall",
        "SelectFeaturedVideos",
        "CreateTalentPlaylist",
        "AddVideoToPlaylist",
        "RemoveVideoFromPlaylist",
        "CreateMatch",
        "ProposeCollaboration",
        "RespondToCollaborationProposal",
        "DeleteUserAccount",
        "UnmatchUsers",
    ];

    /// Decode an untyped command into its typed variant.
    ///
    /// Callers are expected to have checked the fields against the command's
    /// contract first; this only fails when they did not.
    pub fn decode(command: &Command) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<Self>(Value::from(command.clone()))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RegisterUser(_) => "RegisterUser",
            Self::CreateTalentSearch(_) => "CreateTalentSearch",
            Self::UploadTalentVideo(_) => "UploadTalentVideo",
            Self::CreateCallForTalentVideo(_) => "CreateCallForTalentVideo",
            Self::SubmitVideoForCall(_) => "SubmitVideoForCall",
            Self::SelectFeaturedVideos(_) => "SelectFeaturedVideos",
            Self::CreateTalentPlaylist(_) => "CreateTalentPlaylist",
            Self::AddVideoToPlaylist(_) => "AddVideoToPlaylist",
            Self::RemoveVideoFromPlaylist(_) => "RemoveVideoFromPlaylist",
            Self::CreateMatch(_) => "CreateMatch",
            Self::ProposeCollaboration(_) => "ProposeCollaboration",
            Self::RespondToCollaborationProposal(_) => "RespondToCollaborationProposal",
            Self::DeleteUserAccount(_) => "DeleteUserAccount",
            Self::UnmatchUsers(_) => "UnmatchUsers",
        }
    }
}
