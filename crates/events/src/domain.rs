//! Domain event payloads.
//!
//! Each struct is the `data` of one event type; [`DomainEvent`] ties the payload
//! to its event name. Fields copied from a command are [`Verbatim`], so the
//! event repeats the command's text exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use talentpitch_core::{
    CallId, EventId, MatchType, PlaylistId, ProposalId, ProposalResponse, SearchId, SubmissionId,
    UserId, UserType, Verbatim, VideoId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRegistered {
    pub user_id: Verbatim<UserId>,
    pub user_name: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TalentSearchCreated {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_id: Option<SearchId>,
    pub user_id: Verbatim<UserId>,
    pub search_criteria: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TalentVideoUploaded {
    pub video_id: Verbatim<VideoId>,
    pub user_id: Verbatim<UserId>,
    pub video_title: String,
    pub video_description: String,
    pub skills: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallForTalentVideoCreated {
    pub call_id: Verbatim<CallId>,
    pub user_id: Verbatim<UserId>,
    pub call_criteria: String,
    pub deadline: Verbatim<DateTime<Utc>>,
    pub video_title: String,
    pub video_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoSubmittedForCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
    pub user_id: Verbatim<UserId>,
    pub video_id: Verbatim<VideoId>,
    pub call_id: Verbatim<CallId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideosSelectedForCall {
    pub call_id: Verbatim<CallId>,
    pub user_id: Verbatim<UserId>,
    pub selected_video_ids: Vec<Verbatim<VideoId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallWinnerSelected {
    pub call_id: Verbatim<CallId>,
    pub user_id: Verbatim<UserId>,
    pub winner_video_id: Verbatim<VideoId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TalentPlaylistCreated {
    pub playlist_id: Verbatim<PlaylistId>,
    pub user_id: Verbatim<UserId>,
    pub playlist_name: String,
}

/// Payload of both `VideoAddedToPlaylist` and `VideoRemovedFromPlaylist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaylistVideoChanged {
    pub playlist_id: Verbatim<PlaylistId>,
    pub user_id: Verbatim<UserId>,
    pub video_id: Verbatim<VideoId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchCreated {
    pub user_id: Verbatim<UserId>,
    pub target_user_id: Verbatim<UserId>,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsersUnmatched {
    pub user_id: Verbatim<UserId>,
    pub target_user_id: Verbatim<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollaborationProposed {
    pub user_id: Verbatim<UserId>,
    pub target_user_id: Verbatim<UserId>,
    pub proposal_details: String,
}

/// Payload of both `CollaborationProposalAccepted` and `CollaborationProposalRejected`.
///
/// `UserId` is the user who answered the proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollaborationProposalAnswered {
    pub proposal_id: Verbatim<ProposalId>,
    pub user_id: Verbatim<UserId>,
    pub response: ProposalResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccountDeleted {
    pub user_id: Verbatim<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserEventsArchived {
    pub user_id: Verbatim<UserId>,
    pub archived_event_ids: Vec<EventId>,
}

/// Every event the platform records, tagged by event name.
///
/// Serialized adjacently: `{"type": "<EventName>", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    UserRegistered(UserRegistered),
    TalentSearchCreated(TalentSearchCreated),
    TalentVideoUploaded(TalentVideoUploaded),
    CallForTalentVideoCreated(CallForTalentVideoCreated),
    VideoSubmittedForCall(VideoSubmittedForCall),
    VideosSelectedForCall(VideosSelectedForCall),
    CallWinnerSelected(CallWinnerSelected),
    TalentPlaylistCreated(TalentPlaylistCreated),
    VideoAddedToPlaylist(PlaylistVideoChanged),
    VideoRemovedFromPlaylist(PlaylistVideoChanged),
    MatchCreated(MatchCreated),
    UsersUnmatched(UsersUnmatched),
    CollaborationProposed(CollaborationProposed),
    CollaborationProposalAccepted(CollaborationProposalAnswered),
    CollaborationProposalRejected(CollaborationProposalAnswered),
    UserAccountDeleted(UserAccountDeleted),
    UserEventsArchived(UserEventsArchived),
}

impl DomainEvent {
    /// Stable event name (matches the serialized `type`).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::UserRegistered(_) => "UserRegistered",
            Self::TalentSearchCreated(_) => "TalentSearchCreated",
            Self::TalentVideoUploaded(_) => "TalentVideoUploaded",
            Self::CallForTalentVideoCreated(_) => "CallForTalentVideoCreated",
            Self::VideoSubmittedForCall(_) => "VideoSubmittedForCall",
            Self::VideosSelectedForCall(_) => "VideosSelectedForCall",
            Self::CallWinnerSelected(_) => "CallWinnerSelected",
            Self::TalentPlaylistCreated(_) => "TalentPlaylistCreated",
            Self::VideoAddedToPlaylist(_) => "VideoAddedToPlaylist",
            Self::VideoRemovedFromPlaylist(_) => "VideoRemovedFromPlaylist",
            Self::MatchCreated(_) => "MatchCreated",
            Self::UsersUnmatched(_) => "UsersUnmatched",
            Self::CollaborationProposed(_) => "CollaborationProposed",
            Self::CollaborationProposalAccepted(_) => "CollaborationProposalAccepted",
            Self::CollaborationProposalRejected(_) => "CollaborationProposalRejected",
            Self::UserAccountDeleted(_) => "UserAccountDeleted",
            Self::UserEventsArchived(_) => "UserEventsArchived",
        }
    }
}
