//! Command translation pipeline.
//!
//! The `Dispatcher` turns one untyped command into one event, or into one error:
//!
//! ```text
//! Command
//!   ↓
//! 1. Look up the contract for `type`        (none → UnknownCommandType)
//!   ↓
//! 2. Check every field against the contract (any violation → ValidationFailure)
//!   ↓
//! 3. Decode into the typed command
//!   ↓
//! 4. Build the event payload (per-command mapping)
//!   ↓
//! 5. Attach a fresh id + timestamp
//! ```
//!
//! Each call is independent. The dispatcher holds nothing but its immutable
//! registry and start time, so one instance can be shared by any number of
//! threads without locking.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use talentpitch_core::{EventId, TranslateError, TranslateResult, Violation};
use talentpitch_events::{Command, Event, TypedCommand};
use talentpitch_schema::{SchemaRegistry, validator};

use crate::builders;

/// Rule tag reported when checked fields still fail to decode.
///
/// Only reachable with a registry whose contracts are looser than the typed
/// commands they guard.
pub const DECODE_RULE: &str = "decode";

/// Stateless command → event translator.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: SchemaRegistry,
    started_at: DateTime<Utc>,
}

impl Dispatcher {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            started_at: Utc::now(),
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// When this dispatcher was created; no event it records is older.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Translate a command into the event it stands for.
    ///
    /// Returns exactly one event or exactly one error. On failure nothing is
    /// built; validation failures carry every violated rule, not just the first.
    #[instrument(skip(self, command), fields(command_type = %command.command_type()))]
    pub fn translate(&self, command: &Command) -> TranslateResult<Event> {
        // 1) Contract lookup
        let Some(contract) = self.registry.lookup(command.command_type()) else {
            debug!("unknown command type");
            return Err(TranslateError::unknown_type(command.command_type()));
        };

        // 2) Validate (collects all violations)
        if let Err(violations) = validator::check(command.fields(), contract) {
            debug!(violations = violations.len(), "command rejected");
            return Err(TranslateError::ValidationFailure(violations));
        }

        // 3) Decode into the closed command set
        let typed = TypedCommand::decode(command).map_err(|e| {
            warn!(error = %e, "checked command failed to decode");
            TranslateError::validation(Violation::new(
                command.command_type(),
                DECODE_RULE,
                e.to_string(),
            ))
        })?;

        // 4) + 5) Build and stamp
        let payload = builders::build(typed);
        let event = Event::record_at(EventId::new(), self.now(), payload);

        debug!(
            event_type = event.event_type(),
            event_id = %event.id(),
            "command translated"
        );
        Ok(event)
    }

    /// Decode a raw JSON payload and translate it.
    pub fn translate_json(&self, payload: Value) -> TranslateResult<Event> {
        self.translate(&Command::from(payload))
    }

    // Wall clocks can step backwards; never stamp an event before start-up.
    fn now(&self) -> DateTime<Utc> {
        Utc::now().max(self.started_at)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(SchemaRegistry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;

    use talentpitch_events::DomainEvent;
    use talentpitch_schema::{Contract, Rule};

    const USER: &str = "0190b0a4-7c2e-7b31-9d4a-1f2e3d4c5b6a";
    const TARGET: &str = "0190b0a4-7c2e-7b31-9d4a-2a2b2c2d2e2f";
    const VIDEO: &str = "0190b0a4-7c2e-7b31-9d4a-3a3b3c3d3e3f";
    const VIDEO_2: &str = "0190b0a4-7c2e-7b31-9d4a-3a3b3c3d3e40";
    const CALL: &str = "0190b0a4-7c2e-7b31-9d4a-4a4b4c4d4e4f";
    const PLAYLIST: &str = "0190b0a4-7c2e-7b31-9d4a-5a5b5c5d5e5f";
    const PROPOSAL: &str = "0190b0a4-7c2e-7b31-9d4a-6a6b6c6d6e6f";
    const DEADLINE: &str = "2026-12-31T23:59:59Z";

    fn dispatcher() -> Dispatcher {
        Dispatcher::default()
    }

    fn event_json(event: &Event) -> Value {
        serde_json::to_value(event).unwrap()
    }

    fn violated(err: &TranslateError) -> Vec<(String, Option<usize>, String)> {
        err.violations()
            .expect("Expected ValidationFailure")
            .iter()
            .map(|v| (v.field().to_string(), v.element(), v.rule().to_string()))
            .collect()
    }

    /// One valid command per registered type, built with the convenience constructors.
    fn valid_commands() -> Vec<Command> {
        vec![
            Command::register_user(USER, "Ada", "Talent", "a@b.com", "longenough"),
            Command::create_talent_search(USER, "singers in Bogota"),
            Command::upload_talent_video(
                USER,
                VIDEO,
                "My reel",
                "Two minutes of juggling",
                ["juggling", "comedy"],
                ["circus"],
            ),
            Command::create_call_for_talent_video(
                USER,
                CALL,
                "jugglers",
                DEADLINE,
                "Open call",
                "Looking for jugglers",
            ),
            Command::submit_video_for_call(USER, VIDEO, CALL),
            Command::select_featured_videos(USER, CALL, [VIDEO, VIDEO_2]),
            Command::create_talent_playlist(USER, PLAYLIST, "Favourites"),
            Command::add_video_to_playlist(USER, PLAYLIST, VIDEO),
            Command::remove_video_from_playlist(USER, PLAYLIST, VIDEO),
            Command::create_match(USER, TARGET, "Collaborate"),
            Command::propose_collaboration(USER, TARGET, "Let's record an album"),
            Command::respond_to_collaboration_proposal(USER, PROPOSAL, "Accept"),
            Command::delete_user_account(USER),
            Command::unmatch_users(USER, TARGET),
        ]
    }

    #[test]
    fn register_user_yields_user_registered() {
        let input = json!({
            "type": "RegisterUser",
            "UserId": USER,
            "UserName": "Ada",
            "UserType": "Talent",
            "Email": "a@b.com",
            "Password": "longenough",
        });

        let event = dispatcher().translate_json(input).unwrap();
        assert_eq!(event.event_type(), "UserRegistered");

        let json = event_json(&event);
        assert_eq!(json["data"]["UserId"], USER);
        assert_eq!(json["data"]["UserName"], "Ada");
        assert_eq!(json["data"]["UserType"], "Talent");
    }

    #[test]
    fn register_user_reports_all_missing_fields() {
        let err = dispatcher()
            .translate_json(json!({"type": "RegisterUser", "UserName": "Ada"}))
            .unwrap_err();

        let reported: Vec<_> = violated(&err)
            .into_iter()
            .map(|(field, _, rule)| (field, rule))
            .collect();
        assert_eq!(
            reported,
            vec![
                ("UserId".to_string(), "required".to_string()),
                ("UserType".to_string(), "required".to_string()),
                ("Email".to_string(), "required".to_string()),
                ("Password".to_string(), "required".to_string()),
            ]
        );

        let message = err.to_string();
        assert!(message.starts_with("Errors: "));
        for field in ["UserId", "UserType", "Email", "Password"] {
            assert!(message.contains(field), "{message} does not mention {field}");
        }
    }

    #[test]
    fn collaboration_response_branches() {
        let d = dispatcher();
        let accepted = d
            .translate(&Command::respond_to_collaboration_proposal(USER, PROPOSAL, "Accept"))
            .unwrap();
        let rejected = d
            .translate(&Command::respond_to_collaboration_proposal(USER, PROPOSAL, "Reject"))
            .unwrap();

        assert_eq!(accepted.event_type(), "CollaborationProposalAccepted");
        assert_eq!(rejected.event_type(), "CollaborationProposalRejected");
    }

    #[test]
    fn unknown_type_is_reported_verbatim() {
        let err = dispatcher().translate_json(json!({"type": "Bogus"})).unwrap_err();
        assert_eq!(err, TranslateError::unknown_type("Bogus"));
        assert_eq!(err.to_string(), "unknown command type: Bogus");
    }

    #[test]
    fn missing_type_is_unknown() {
        let err = dispatcher().translate_json(json!({"UserId": USER})).unwrap_err();
        assert_eq!(err.to_string(), "unknown command type: ");
    }

    #[test]
    fn bad_skill_element_is_identified() {
        let cmd = Command::upload_talent_video(
            USER,
            VIDEO,
            "My reel",
            "Two minutes of modeling",
            ["go", "3d-modeling!"],
            ["design"],
        );

        let err = dispatcher().translate(&cmd).unwrap_err();
        assert_eq!(
            violated(&err),
            vec![("Skills".to_string(), Some(1), "alpha".to_string())]
        );
        assert!(err.to_string().contains("Skills[1]"));
        assert!(err.to_string().contains("3d-modeling!"));
    }

    #[test]
    fn mistyped_fields_are_violations_not_panics() {
        let err = dispatcher()
            .translate_json(json!({
                "type": "CreateCallForTalentVideo",
                "UserId": 17,
                "CallId": [CALL],
                "CallCriteria": {"skills": ["x"]},
                "Deadline": "next friday",
                "VideoTitle": true,
                "VideoDescription": "Looking for jugglers",
            }))
            .unwrap_err();

        let fields: Vec<_> = violated(&err).into_iter().map(|(f, _, _)| f).collect();
        assert_eq!(
            fields,
            vec!["UserId", "CallId", "CallCriteria", "Deadline", "VideoTitle"]
        );
    }

    #[test]
    fn length_bounds_apply() {
        let long_title = "x".repeat(101);
        let err = dispatcher()
            .translate(&Command::create_talent_playlist(USER, PLAYLIST, long_title))
            .unwrap_err();
        assert_eq!(
            violated(&err),
            vec![("PlaylistName".to_string(), None, "max".to_string())]
        );
    }

    #[test]
    fn extra_fields_do_not_reach_the_event() {
        let mut input = Command::delete_user_account(USER).to_json();
        input["Reason"] = json!("moving on");
        let event = dispatcher().translate_json(input).unwrap();
        assert_eq!(event_json(&event)["data"], json!({"UserId": USER}));
    }

    #[test]
    fn every_constructor_round_trips() {
        let d = dispatcher();
        for cmd in valid_commands() {
            let event = d
                .translate(&cmd)
                .unwrap_or_else(|e| panic!("{} failed: {e}", cmd.command_type()));
            let data = event_json(&event)["data"].clone();
            let data = data.as_object().unwrap();

            for (name, value) in data {
                assert_eq!(
                    cmd.field(name),
                    Some(value),
                    "{}: event field {name} does not match the command",
                    cmd.command_type()
                );
            }
        }
    }

    #[test]
    fn event_data_keeps_every_command_argument() {
        // Fields a command carries that its event deliberately does not.
        let dropped = |command_type: &str| -> &'static [&'static str] {
            match command_type {
                "RegisterUser" => &["Email", "Password"],
                _ => &[],
            }
        };

        let d = dispatcher();
        for cmd in valid_commands() {
            let event = d.translate(&cmd).unwrap();
            let json = event_json(&event);
            for name in cmd.fields().keys() {
                if dropped(cmd.command_type()).contains(&name.as_str()) {
                    continue;
                }
                assert!(
                    json["data"].get(name).is_some(),
                    "{}: {name} missing from event",
                    cmd.command_type()
                );
            }
        }
    }

    #[test]
    fn registry_and_typed_commands_agree() {
        let registered = dispatcher().registry().command_types().to_vec();
        assert_eq!(registered, TypedCommand::TYPE_NAMES);
        let constructed: Vec<_> = valid_commands()
            .iter()
            .map(|c| c.command_type().to_string())
            .collect();
        assert_eq!(constructed, registered);
    }

    #[test]
    fn same_input_same_event_modulo_identity() {
        let d = dispatcher();
        let cmd = Command::create_match(USER, TARGET, "Sponsor");
        let a = d.translate(&cmd).unwrap();
        let b = d.translate(&cmd).unwrap();

        assert_eq!(a.payload(), b.payload());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn events_are_never_older_than_the_dispatcher() {
        let d = dispatcher();
        let event = d.translate(&Command::delete_user_account(USER)).unwrap();
        assert!(event.time() >= d.started_at());
    }

    #[test]
    fn concurrent_callers_get_distinct_ids() {
        let d = Arc::new(dispatcher());
        let ids: Vec<EventId> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let d = Arc::clone(&d);
                    scope.spawn(move || {
                        (0..200)
                            .map(|_| d.translate(&Command::unmatch_users(USER, TARGET)).unwrap().id())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn deadline_is_kept_as_a_timestamp() {
        let cmd = Command::create_call_for_talent_video(
            USER,
            CALL,
            "jugglers",
            DEADLINE,
            "Open call",
            "Looking for jugglers",
        );
        let event = dispatcher().translate(&cmd).unwrap();
        match event.payload() {
            DomainEvent::CallForTalentVideoCreated(e) => {
                assert_eq!(e.deadline.value().to_rfc3339(), "2026-12-31T23:59:59+00:00");
                assert_eq!(e.deadline.as_str(), DEADLINE);
            }
            other => panic!("Expected CallForTalentVideoCreated, got {other:?}"),
        }
    }

    #[test]
    fn event_data_repeats_input_text_exactly() {
        let upper = USER.to_uppercase();
        let offset_deadline = "2026-12-31T23:59:59.5+02:00";
        let d = dispatcher();

        let cmds = [
            Command::delete_user_account(upper.as_str()),
            Command::create_call_for_talent_video(
                upper.as_str(),
                CALL.to_uppercase(),
                "jugglers",
                offset_deadline,
                "Open call",
                "Looking for jugglers",
            ),
            Command::select_featured_videos(USER, CALL, [VIDEO.to_uppercase(), VIDEO_2.to_string()]),
            Command::respond_to_collaboration_proposal(upper.as_str(), PROPOSAL.to_uppercase(), "Accept"),
        ];

        for cmd in cmds {
            let event = d.translate(&cmd).unwrap();
            let data = event_json(&event)["data"].clone();
            for (name, value) in cmd.fields() {
                assert_eq!(
                    data.get(name),
                    Some(value),
                    "{}: {name} was not copied verbatim",
                    cmd.command_type()
                );
            }
        }
    }

    #[test]
    fn loose_custom_contract_surfaces_decode_failure() {
        let registry = SchemaRegistry::from_entries([(
            "DeleteUserAccount",
            Contract::new().field("UserId", [Rule::Required]),
        )]);
        let d = Dispatcher::new(registry);

        let err = d.translate(&Command::delete_user_account("nope")).unwrap_err();
        assert_eq!(
            violated(&err),
            vec![("DeleteUserAccount".to_string(), None, DECODE_RULE.to_string())]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use talentpitch_core::UserType;

        fn arb_value() -> impl Strategy<Value = Value> {
            let leaf = prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::from),
                any::<i64>().prop_map(Value::from),
                "[ -~]{0,24}".prop_map(Value::from),
                Just(Value::from(USER)),
            ];
            leaf.prop_recursive(2, 8, 4, |inner| {
                prop::collection::vec(inner, 0..4).prop_map(Value::Array)
            })
        }

        fn arb_fields() -> impl Strategy<Value = serde_json::Map<String, Value>> {
            let names = prop::sample::select(vec![
                "UserId",
                "UserName",
                "UserType",
                "Email",
                "Password",
                "VideoId",
                "Skills",
                "Response",
                "Deadline",
                "Other",
            ]);
            prop::collection::vec((names, arb_value()), 0..8)
                .prop_map(|pairs| pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any unregistered type is rejected as unknown, whatever the fields.
            #[test]
            fn unregistered_types_are_always_unknown(
                type_name in "[A-Za-z]{0,20}",
                fields in arb_fields(),
            ) {
                let d = dispatcher();
                prop_assume!(!d.registry().contains(&type_name));

                let err = d.translate(&Command::new(type_name.clone(), fields)).unwrap_err();
                prop_assert_eq!(err, TranslateError::unknown_type(type_name));
            }

            /// Property: registered types never panic and fail only with violations.
            #[test]
            fn registered_types_yield_event_or_violations(
                idx in 0usize..14,
                fields in arb_fields(),
            ) {
                let d = dispatcher();
                let type_name = d.registry().command_types()[idx];

                match d.translate(&Command::new(type_name, fields)) {
                    Ok(event) => prop_assert!(event.time() >= d.started_at()),
                    Err(err) => {
                        let violations = err.violations();
                        prop_assert!(violations.is_some_and(|v| !v.is_empty()));
                        prop_assert!(
                            violations
                                .into_iter()
                                .flat_map(|v| v.iter())
                                .all(|v| v.rule() != DECODE_RULE)
                        );
                    }
                }
            }

            /// Property: translating twice differs only in id and time.
            #[test]
            fn translation_is_deterministic_modulo_identity(
                name in "[A-Za-z]{1,30}",
                kind in prop::sample::select(UserType::NAMES),
            ) {
                let d = dispatcher();
                let cmd = Command::register_user(USER, name, kind, "a@b.com", "longenough");
                let a = d.translate(&cmd).unwrap();
                let b = d.translate(&cmd).unwrap();
                prop_assert_eq!(a.payload(), b.payload());
                prop_assert_ne!(a.id(), b.id());
            }
        }
    }
}
