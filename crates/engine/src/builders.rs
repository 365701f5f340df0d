//! Per-command event builders.
//!
//! Pure field mapping from a checked [`TypedCommand`] to the event payload it
//! produces. Identity and time are attached by the dispatcher, not here.

use talentpitch_core::ProposalResponse;
use talentpitch_events::TypedCommand;
use talentpitch_events::commands::{
    CreateCallForTalentVideo, CreateMatch, CreateTalentPlaylist, CreateTalentSearch,
    DeleteUserAccount, PlaylistVideo, ProposeCollaboration, RegisterUser,
    RespondToCollaborationProposal, SelectFeaturedVideos, SubmitVideoForCall, UnmatchUsers,
    UploadTalentVideo,
};
use talentpitch_events::domain::{
    CallForTalentVideoCreated, CollaborationProposalAnswered, CollaborationProposed, DomainEvent,
    MatchCreated, PlaylistVideoChanged, TalentPlaylistCreated, TalentSearchCreated,
    TalentVideoUploaded, UserAccountDeleted, UserRegistered, UsersUnmatched,
    VideoSubmittedForCall, VideosSelectedForCall,
};

/// Build the event payload for a checked command.
pub fn build(command: TypedCommand) -> DomainEvent {
    match command {
        TypedCommand::RegisterUser(cmd) => user_registered(cmd),
        TypedCommand::CreateTalentSearch(cmd) => talent_search_created(cmd),
        TypedCommand::UploadTalentVideo(cmd) => talent_video_uploaded(cmd),
        TypedCommand::CreateCallForTalentVideo(cmd) => call_for_talent_video_created(cmd),
        TypedCommand::SubmitVideoForCall(cmd) => video_submitted_for_call(cmd),
        TypedCommand::SelectFeaturedVideos(cmd) => videos_selected_for_call(cmd),
        TypedCommand::CreateTalentPlaylist(cmd) => talent_playlist_created(cmd),
        TypedCommand::AddVideoToPlaylist(cmd) => {
            DomainEvent::VideoAddedToPlaylist(playlist_video_changed(cmd))
        }
        TypedCommand::RemoveVideoFromPlaylist(cmd) => {
            DomainEvent::VideoRemovedFromPlaylist(playlist_video_changed(cmd))
        }
        TypedCommand::CreateMatch(cmd) => match_created(cmd),
        TypedCommand::ProposeCollaboration(cmd) => collaboration_proposed(cmd),
        TypedCommand::RespondToCollaborationProposal(cmd) => collaboration_answered(cmd),
        TypedCommand::DeleteUserAccount(cmd) => user_account_deleted(cmd),
        TypedCommand::UnmatchUsers(cmd) => users_unmatched(cmd),
    }
}

// Credentials stay behind: the event only records who registered and as what.
fn user_registered(cmd: RegisterUser) -> DomainEvent {
    DomainEvent::UserRegistered(UserRegistered {
        user_id: cmd.user_id,
        user_name: cmd.user_name,
        user_type: cmd.user_type,
    })
}

// Search and submission ids are not minted here; translation only copies.
fn talent_search_created(cmd: CreateTalentSearch) -> DomainEvent {
    DomainEvent::TalentSearchCreated(TalentSearchCreated {
        search_id: None,
        user_id: cmd.user_id,
        search_criteria: cmd.search_criteria,
    })
}

fn talent_video_uploaded(cmd: UploadTalentVideo) -> DomainEvent {
    DomainEvent::TalentVideoUploaded(TalentVideoUploaded {
        video_id: cmd.video_id,
        user_id: cmd.user_id,
        video_title: cmd.video_title,
        video_description: cmd.video_description,
        skills: cmd.skills,
        categories: cmd.categories,
    })
}

fn call_for_talent_video_created(cmd: CreateCallForTalentVideo) -> DomainEvent {
    DomainEvent::CallForTalentVideoCreated(CallForTalentVideoCreated {
        call_id: cmd.call_id,
        user_id: cmd.user_id,
        call_criteria: cmd.call_criteria,
        deadline: cmd.deadline,
        video_title: cmd.video_title,
        video_description: cmd.video_description,
    })
}

fn video_submitted_for_call(cmd: SubmitVideoForCall) -> DomainEvent {
    DomainEvent::VideoSubmittedForCall(VideoSubmittedForCall {
        submission_id: None,
        user_id: cmd.user_id,
        video_id: cmd.video_id,
        call_id: cmd.call_id,
    })
}

fn videos_selected_for_call(cmd: SelectFeaturedVideos) -> DomainEvent {
    DomainEvent::VideosSelectedForCall(VideosSelectedForCall {
        call_id: cmd.call_id,
        user_id: cmd.user_id,
        selected_video_ids: cmd.selected_video_ids,
    })
}

fn talent_playlist_created(cmd: CreateTalentPlaylist) -> DomainEvent {
    DomainEvent::TalentPlaylistCreated(TalentPlaylistCreated {
        playlist_id: cmd.playlist_id,
        user_id: cmd.user_id,
        playlist_name: cmd.playlist_name,
    })
}

fn playlist_video_changed(cmd: PlaylistVideo) -> PlaylistVideoChanged {
    PlaylistVideoChanged {
        playlist_id: cmd.playlist_id,
        user_id: cmd.user_id,
        video_id: cmd.video_id,
    }
}

fn match_created(cmd: CreateMatch) -> DomainEvent {
    DomainEvent::MatchCreated(MatchCreated {
        user_id: cmd.user_id,
        target_user_id: cmd.target_user_id,
        match_type: cmd.match_type,
    })
}

fn collaboration_proposed(cmd: ProposeCollaboration) -> DomainEvent {
    DomainEvent::CollaborationProposed(CollaborationProposed {
        user_id: cmd.user_id,
        target_user_id: cmd.target_user_id,
        proposal_details: cmd.proposal_details,
    })
}

fn collaboration_answered(cmd: RespondToCollaborationProposal) -> DomainEvent {
    let answer = CollaborationProposalAnswered {
        proposal_id: cmd.proposal_id,
        user_id: cmd.user_id,
        response: cmd.response,
    };
    match answer.response {
        ProposalResponse::Accept => DomainEvent::CollaborationProposalAccepted(answer),
        ProposalResponse::Reject => DomainEvent::CollaborationProposalRejected(answer),
    }
}

fn user_account_deleted(cmd: DeleteUserAccount) -> DomainEvent {
    DomainEvent::UserAccountDeleted(UserAccountDeleted {
        user_id: cmd.user_id,
    })
}

fn users_unmatched(cmd: UnmatchUsers) -> DomainEvent {
    DomainEvent::UsersUnmatched(UsersUnmatched {
        user_id: cmd.user_id,
        target_user_id: cmd.target_user_id,
    })
}
