//! The built-in contract table, one entry per supported command type.
//!
//! Free-text fields carry an explicit `string` rule so length bounds are never
//! applied to the wrong kind of value.

use talentpitch_core::{MatchType, ProposalResponse, UserType};

use crate::contract::Contract;
use crate::rule::Rule;

fn id() -> [Rule; 2] {
    [Rule::Required, Rule::Uuid]
}

fn text(min: usize, max: usize) -> [Rule; 4] {
    [Rule::Required, Rule::Text, Rule::Min(min), Rule::Max(max)]
}

fn register_user() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("UserName", [Rule::Required, Rule::Alpha])
        .field("UserType", [Rule::Required, Rule::OneOf(UserType::NAMES)])
        .field("Email", [Rule::Required, Rule::Email])
        .field("Password", [Rule::Required, Rule::Text, Rule::Min(8)])
}

fn create_talent_search() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("SearchCriteria", text(3, 100))
}

fn upload_talent_video() -> Contract {
    let words = || [Rule::Required, Rule::Dive(vec![Rule::Alpha, Rule::Min(1)])];
    Contract::new()
        .field("UserId", id())
        .field("VideoId", id())
        .field("VideoTitle", text(3, 100))
        .field("VideoDescription", text(10, 1000))
        .field("Skills", words())
        .field("Categories", words())
}

fn create_call_for_talent_video() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("CallId", id())
        .field("CallCriteria", text(3, 1000))
        .field("Deadline", [Rule::Required, Rule::DateTime])
        .field("VideoTitle", text(3, 100))
        .field("VideoDescription", text(10, 1000))
}

fn submit_video_for_call() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("VideoId", id())
        .field("CallId", id())
}

fn select_featured_videos() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("CallId", id())
        .field(
            "SelectedVideoIds",
            [Rule::Required, Rule::Dive(vec![Rule::Uuid])],
        )
}

fn create_talent_playlist() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("PlaylistId", id())
        .field("PlaylistName", text(3, 100))
}

fn playlist_video() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("PlaylistId", id())
        .field("VideoId", id())
}

fn create_match() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("TargetUserId", id())
        .field("MatchType", [Rule::Required, Rule::OneOf(MatchType::NAMES)])
}

fn propose_collaboration() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("TargetUserId", id())
        .field("ProposalDetails", text(10, 1000))
}

fn respond_to_collaboration_proposal() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("ProposalId", id())
        .field(
            "Response",
            [Rule::Required, Rule::OneOf(ProposalResponse::NAMES)],
        )
}

fn delete_user_account() -> Contract {
    Contract::new().field("UserId", id())
}

fn unmatch_users() -> Contract {
    Contract::new()
        .field("UserId", id())
        .field("TargetUserId", id())
}

/// Every built-in `(command type, contract)` pair, in declaration order.
pub fn builtin() -> Vec<(&'static str, Contract)> {
    vec![
        ("RegisterUser", register_user()),
        ("CreateTalentSearch", create_talent_search()),
        ("UploadTalentVideo", upload_talent_video()),
        ("CreateCallForTalentVideo", create_call_for_talent_video()),
        ("SubmitVideoForCall", submit_video_for_call()),
        ("SelectFeaturedVideos", select_featured_videos()),
        ("CreateTalentPlaylist", create_talent_playlist()),
        ("AddVideoToPlaylist", playlist_video()),
        ("RemoveVideoFromPlaylist", playlist_video()),
        ("CreateMatch", create_match()),
        ("ProposeCollaboration", propose_collaboration()),
        (
            "RespondToCollaborationProposal",
            respond_to_collaboration_proposal(),
        ),
        ("DeleteUserAccount", delete_user_account()),
        ("UnmatchUsers", unmatch_users()),
    ]
}
