//! Tests du cycle de vie des missions (logique pure, sans base)

use chrono::{Duration, TimeZone, Utc};

use ambulance_dispatch::models::mission::{
    actual_duration_minutes, MissionStatus,
};

#[test]
fn test_nominal_progression() {
    // en_attente → assignee → en_cours → terminee
    assert!(MissionStatus::EnAttente.can_transition_to(MissionStatus::Assignee));
    assert!(MissionStatus::Assignee.can_transition_to(MissionStatus::EnCours));
    assert!(MissionStatus::EnCours.can_transition_to(MissionStatus::Terminee));
}

#[test]
fn test_cancellation_from_every_active_state() {
    for status in MissionStatus::ACTIVE {
        assert!(
            status.can_transition_to(MissionStatus::Annulee),
            "annulation refusée depuis {}",
            status.as_str()
        );
    }
}

#[test]
fn test_no_revert_after_completion() {
    assert!(!MissionStatus::Terminee.can_transition_to(MissionStatus::EnAttente));
    assert!(!MissionStatus::Terminee.can_transition_to(MissionStatus::EnCours));
    assert!(!MissionStatus::Annulee.can_transition_to(MissionStatus::Assignee));
}

#[test]
fn test_skipping_states_is_rejected() {
    assert!(!MissionStatus::EnAttente.can_transition_to(MissionStatus::EnCours));
    assert!(!MissionStatus::EnAttente.can_transition_to(MissionStatus::Terminee));
    assert!(!MissionStatus::Assignee.can_transition_to(MissionStatus::Terminee));
}

#[test]
fn test_duration_for_25_minute_mission() {
    // Mission démarrée à T2, terminée à T2+25min → actual_duration = 25
    let t2 = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
    let completed = t2 + Duration::minutes(25);
    assert_eq!(actual_duration_minutes(t2, completed), 25);
}

#[test]
fn test_duration_rounds_down_to_whole_minutes() {
    let start = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
    assert_eq!(
        actual_duration_minutes(start, start + Duration::seconds(24 * 60 + 59)),
        24
    );
    assert_eq!(actual_duration_minutes(start, start + Duration::seconds(30)), 0);
}

#[test]
fn test_duration_never_negative() {
    // Horloge qui recule: on ne produit jamais de durée négative
    let start = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
    assert_eq!(
        actual_duration_minutes(start, start - Duration::minutes(5)),
        0
    );
}

#[test]
fn test_assignment_window() {
    assert!(MissionStatus::EnAttente.can_assign());
    assert!(MissionStatus::Assignee.can_assign());
    assert!(!MissionStatus::EnCours.can_assign());
    assert!(!MissionStatus::Terminee.can_assign());
    assert!(!MissionStatus::Annulee.can_assign());
}
