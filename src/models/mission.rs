//! Modèle Mission et cycle de vie
//!
//! Mappe à la table `missions`. Contient la table de transitions du
//! statut de mission: les changements de statut passent exclusivement
//! par cette table, toute transition hors tableau est rejetée.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Priorité de la mission - mappe à l'ENUM mission_priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "mission_priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MissionPriority {
    Critique,
    Urgente,
    Normale,
    Faible,
}

/// Statut de la mission - mappe à l'ENUM mission_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "mission_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    EnAttente,
    Assignee,
    EnCours,
    Terminee,
    Annulee,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::EnAttente => "en_attente",
            MissionStatus::Assignee => "assignee",
            MissionStatus::EnCours => "en_cours",
            MissionStatus::Terminee => "terminee",
            MissionStatus::Annulee => "annulee",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "en_attente" => Some(MissionStatus::EnAttente),
            "assignee" => Some(MissionStatus::Assignee),
            "en_cours" => Some(MissionStatus::EnCours),
            "terminee" => Some(MissionStatus::Terminee),
            "annulee" => Some(MissionStatus::Annulee),
            _ => None,
        }
    }

    /// Statuts considérés comme actifs (mission en cours de traitement)
    pub const ACTIVE: [MissionStatus; 3] = [
        MissionStatus::EnAttente,
        MissionStatus::Assignee,
        MissionStatus::EnCours,
    ];

    /// Un statut terminal n'accepte plus aucune transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, MissionStatus::Terminee | MissionStatus::Annulee)
    }

    /// Table de transitions du cycle de vie.
    ///
    /// en_attente → assignee | annulee
    /// assignee   → en_cours | annulee
    /// en_cours   → terminee | annulee
    /// terminee, annulee → (terminaux)
    ///
    /// Re-poser le statut courant est un no-op idempotent accepté,
    /// y compris sur un statut terminal.
    pub fn can_transition_to(&self, next: MissionStatus) -> bool {
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (MissionStatus::EnAttente, MissionStatus::Assignee)
                | (MissionStatus::EnAttente, MissionStatus::Annulee)
                | (MissionStatus::Assignee, MissionStatus::EnCours)
                | (MissionStatus::Assignee, MissionStatus::Annulee)
                | (MissionStatus::EnCours, MissionStatus::Terminee)
                | (MissionStatus::EnCours, MissionStatus::Annulee)
        )
    }

    /// L'assignation n'est valide que tant que la mission n'a pas démarré
    pub fn can_assign(&self) -> bool {
        matches!(self, MissionStatus::EnAttente | MissionStatus::Assignee)
    }
}

/// Mission - mappe exactement à la table missions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mission {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_age: Option<i32>,
    pub patient_condition: String,
    pub priority: MissionPriority,
    pub status: MissionStatus,
    // Localisation de prise en charge
    pub pickup_address: String,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    // Destination
    pub hospital_id: Uuid,
    // Assignation
    pub ambulance_id: Option<Uuid>,
    pub assigned_personnel: Option<Json<Vec<Uuid>>>,
    // Timing
    pub created_at: DateTime<Utc>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub estimated_duration: i32,
    pub actual_duration: Option<i32>,
    // Informations supplémentaires
    pub symptoms: Option<Json<Vec<String>>>,
    pub notes: Option<String>,
}

/// Durée réelle en minutes entières, arrondie vers le bas
pub fn actual_duration_minutes(
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
) -> i32 {
    let seconds = (completed_at - started_at).num_seconds().max(0);
    (seconds / 60) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_nominal_progression_is_allowed() {
        assert!(MissionStatus::EnAttente.can_transition_to(MissionStatus::Assignee));
        assert!(MissionStatus::Assignee.can_transition_to(MissionStatus::EnCours));
        assert!(MissionStatus::EnCours.can_transition_to(MissionStatus::Terminee));
    }

    #[test]
    fn test_annulation_from_any_active_state() {
        assert!(MissionStatus::EnAttente.can_transition_to(MissionStatus::Annulee));
        assert!(MissionStatus::Assignee.can_transition_to(MissionStatus::Annulee));
        assert!(MissionStatus::EnCours.can_transition_to(MissionStatus::Annulee));
    }

    #[test]
    fn test_illegal_transitions_are_rejected() {
        assert!(!MissionStatus::EnAttente.can_transition_to(MissionStatus::EnCours));
        assert!(!MissionStatus::EnAttente.can_transition_to(MissionStatus::Terminee));
        assert!(!MissionStatus::Assignee.can_transition_to(MissionStatus::Terminee));
        assert!(!MissionStatus::EnCours.can_transition_to(MissionStatus::EnAttente));
    }

    #[test]
    fn test_terminal_states_are_locked() {
        for status in MissionStatus::ACTIVE {
            assert!(!status.is_terminal());
        }
        for terminal in [MissionStatus::Terminee, MissionStatus::Annulee] {
            assert!(terminal.is_terminal());
            for next in [
                MissionStatus::EnAttente,
                MissionStatus::Assignee,
                MissionStatus::EnCours,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
            assert!(!terminal.can_assign());
        }
        assert!(!MissionStatus::Terminee.can_transition_to(MissionStatus::Annulee));
        assert!(!MissionStatus::Annulee.can_transition_to(MissionStatus::Terminee));
    }

    #[test]
    fn test_same_status_is_idempotent_noop() {
        assert!(MissionStatus::EnCours.can_transition_to(MissionStatus::EnCours));
        assert!(MissionStatus::EnAttente.can_transition_to(MissionStatus::EnAttente));
        // La re-pose d'un statut terminal est aussi un no-op, pas un rejet
        assert!(MissionStatus::Terminee.can_transition_to(MissionStatus::Terminee));
    }

    #[test]
    fn test_assignment_allowed_before_start_only() {
        assert!(MissionStatus::EnAttente.can_assign());
        assert!(MissionStatus::Assignee.can_assign());
        assert!(!MissionStatus::EnCours.can_assign());
    }

    #[test]
    fn test_actual_duration_rounds_down() {
        let start = Utc::now();
        assert_eq!(
            actual_duration_minutes(start, start + Duration::minutes(25)),
            25
        );
        assert_eq!(
            actual_duration_minutes(start, start + Duration::seconds(25 * 60 + 59)),
            25
        );
        assert_eq!(
            actual_duration_minutes(start, start + Duration::seconds(59)),
            0
        );
    }

    #[test]
    fn test_status_labels_roundtrip() {
        for status in [
            MissionStatus::EnAttente,
            MissionStatus::Assignee,
            MissionStatus::EnCours,
            MissionStatus::Terminee,
            MissionStatus::Annulee,
        ] {
            assert_eq!(MissionStatus::from_label(status.as_str()), Some(status));
        }
        assert_eq!(MissionStatus::from_label("perdue"), None);
    }
}
