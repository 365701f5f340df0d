use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use talentpitch_core::{
    CallId, EventId, MatchType, PlaylistId, ProposalId, ProposalResponse, SearchId, SubmissionId,
    UserId, UserType, Verbatim, VideoId,
};

use crate::domain::{
    CallForTalentVideoCreated, CallWinnerSelected, CollaborationProposalAnswered,
    CollaborationProposed, DomainEvent, MatchCreated, PlaylistVideoChanged, TalentPlaylistCreated,
    TalentSearchCreated, TalentVideoUploaded, UserAccountDeleted, UserEventsArchived,
    UserRegistered, UsersUnmatched, VideoSubmittedForCall, VideosSelectedForCall,
};

/// A recorded event: a finished fact.
///
/// Events are:
/// - **immutable** (no setters; treat them as facts)
/// - **uniquely identified** (UUIDv7 `id`)
/// - **timestamped** at the moment they were recorded
///
/// Wire shape:
///
/// ```text
/// {"id": "<uuid>", "type": "UserRegistered", "data": {...}, "time": "<RFC 3339>"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    #[serde(flatten)]
    payload: DomainEvent,
    time: DateTime<Utc>,
}

impl Event {
    /// Record `payload` now, under a fresh identifier.
    pub fn record(payload: DomainEvent) -> Self {
        Self::record_at(EventId::new(), Utc::now(), payload)
    }

    /// Record `payload` with explicit metadata (useful for deterministic tests).
    pub fn record_at(id: EventId, time: DateTime<Utc>, payload: DomainEvent) -> Self {
        Self { id, payload, time }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn payload(&self) -> &DomainEvent {
        &self.payload
    }

    pub fn into_payload(self) -> DomainEvent {
        self.payload
    }
}

/// Canonical constructors, one per event type, for building events outside
/// the dispatch path.
impl Event {
    pub fn user_registered(user_id: UserId, user_name: impl Into<String>, user_type: UserType) -> Self {
        Self::record(DomainEvent::UserRegistered(UserRegistered {
            user_id: user_id.into(),
            user_name: user_name.into(),
            user_type,
        }))
    }

    pub fn talent_search_created(
        search_id: Option<SearchId>,
        user_id: UserId,
        search_criteria: impl Into<String>,
    ) -> Self {
        Self::record(DomainEvent::TalentSearchCreated(TalentSearchCreated {
            search_id,
            user_id: user_id.into(),
            search_criteria: search_criteria.into(),
        }))
    }

    pub fn talent_video_uploaded(
        video_id: VideoId,
        user_id: UserId,
        video_title: impl Into<String>,
        video_description: impl Into<String>,
        skills: Vec<String>,
        categories: Vec<String>,
    ) -> Self {
        Self::record(DomainEvent::TalentVideoUploaded(TalentVideoUploaded {
            video_id: video_id.into(),
            user_id: user_id.into(),
            video_title: video_title.into(),
            video_description: video_description.into(),
            skills,
            categories,
        }))
    }

    pub fn call_for_talent_video_created(
        call_id: CallId,
        user_id: UserId,
        call_criteria: impl Into<String>,
        deadline: DateTime<Utc>,
        video_title: impl Into<String>,
        video_description: impl Into<String>,
    ) -> Self {
        Self::record(DomainEvent::CallForTalentVideoCreated(CallForTalentVideoCreated {
            call_id: call_id.into(),
            user_id: user_id.into(),
            call_criteria: call_criteria.into(),
            deadline: Verbatim::from_parts(
                deadline,
                deadline.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
            video_title: video_title.into(),
            video_description: video_description.into(),
        }))
    }

    pub fn video_submitted_for_call(
        submission_id: Option<SubmissionId>,
        user_id: UserId,
        video_id: VideoId,
        call_id: CallId,
    ) -> Self {
        Self::record(DomainEvent::VideoSubmittedForCall(VideoSubmittedForCall {
            submission_id,
            user_id: user_id.into(),
            video_id: video_id.into(),
            call_id: call_id.into(),
        }))
    }

    pub fn videos_selected_for_call(
        call_id: CallId,
        user_id: UserId,
        selected_video_ids: Vec<VideoId>,
    ) -> Self {
        Self::record(DomainEvent::VideosSelectedForCall(VideosSelectedForCall {
            call_id: call_id.into(),
            user_id: user_id.into(),
            selected_video_ids: selected_video_ids.into_iter().map(Verbatim::from).collect(),
        }))
    }

    pub fn call_winner_selected(call_id: CallId, user_id: UserId, winner_video_id: VideoId) -> Self {
        Self::record(DomainEvent::CallWinnerSelected(CallWinnerSelected {
            call_id: call_id.into(),
            user_id: user_id.into(),
            winner_video_id: winner_video_id.into(),
        }))
    }

    pub fn talent_playlist_created(
        playlist_id: PlaylistId,
        user_id: UserId,
        playlist_name: impl Into<String>,
    ) -> Self {
        Self::record(DomainEvent::TalentPlaylistCreated(TalentPlaylistCreated {
            playlist_id: playlist_id.into(),
            user_id: user_id.into(),
            playlist_name: playlist_name.into(),
        }))
    }

    pub fn video_added_to_playlist(playlist_id: PlaylistId, user_id: UserId, video_id: VideoId) -> Self {
        Self::record(DomainEvent::VideoAddedToPlaylist(PlaylistVideoChanged {
            playlist_id: playlist_id.into(),
            user_id: user_id.into(),
            video_id: video_id.into(),
        }))
    }

    pub fn video_removed_from_playlist(
        playlist_id: PlaylistId,
        user_id: UserId,
        video_id: VideoId,
    ) -> Self {
        Self::record(DomainEvent::VideoRemovedFromPlaylist(PlaylistVideoChanged {
            playlist_id: playlist_id.into(),
            user_id: user_id.into(),
            video_id: video_id.into(),
        }))
    }

    pub fn match_created(user_id: UserId, target_user_id: UserId, match_type: MatchType) -> Self {
        Self::record(DomainEvent::MatchCreated(MatchCreated {
            user_id: user_id.into(),
            target_user_id: target_user_id.into(),
            match_type,
        }))
    }

    pub fn users_unmatched(user_id: UserId, target_user_id: UserId) -> Self {
        Self::record(DomainEvent::UsersUnmatched(UsersUnmatched {
            user_id: user_id.into(),
            target_user_id: target_user_id.into(),
        }))
    }

    pub fn collaboration_proposed(
        user_id: UserId,
        target_user_id: UserId,
        proposal_details: impl Into<String>,
    ) -> Self {
        Self::record(DomainEvent::CollaborationProposed(CollaborationProposed {
            user_id: user_id.into(),
            target_user_id: target_user_id.into(),
            proposal_details: proposal_details.into(),
        }))
    }

    pub fn collaboration_proposal_accepted(proposal_id: ProposalId, user_id: UserId) -> Self {
        Self::record(DomainEvent::CollaborationProposalAccepted(answer(
            proposal_id,
            user_id,
            ProposalResponse::Accept,
        )))
    }

    pub fn collaboration_proposal_rejected(proposal_id: ProposalId, user_id: UserId) -> Self {
        Self::record(DomainEvent::CollaborationProposalRejected(answer(
            proposal_id,
            user_id,
            ProposalResponse::Reject,
        )))
    }

    pub fn user_account_deleted(user_id: UserId) -> Self {
        Self::record(DomainEvent::UserAccountDeleted(UserAccountDeleted {
            user_id: user_id.into(),
        }))
    }

    pub fn user_events_archived(user_id: UserId, archived_event_ids: Vec<EventId>) -> Self {
        Self::record(DomainEvent::UserEventsArchived(UserEventsArchived {
            user_id: user_id.into(),
            archived_event_ids,
        }))
    }
}

fn answer(
    proposal_id: ProposalId,
    user_id: UserId,
    response: ProposalResponse,
) -> CollaborationProposalAnswered {
    CollaborationProposalAnswered {
        proposal_id: proposal_id.into(),
        user_id: user_id.into(),
        response,
    }
}
