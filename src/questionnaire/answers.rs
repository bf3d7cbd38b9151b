//! Typed questionnaire answer record.
//!
//! Field names and wire values mirror the intake form exactly: enumerated
//! answers carry their French form labels, multi-select answers use the
//! form's option identifiers, and the record deserializes from the same
//! camelCase JSON the form submits.
//!
//! Field-level constraints (age range, free-text lengths, non-empty
//! multi-selects) and the one cross-field invariant (an affirmative
//! ideation history requires a recency answer) are enforced by an explicit
//! [`QuestionnaireAnswers::validate`] pass over the complete record, never
//! by per-field mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted age.
pub const MIN_AGE: u8 = 12;

/// Maximum accepted age.
pub const MAX_AGE: u8 = 120;

/// Minimum length for required free-text answers.
pub const MIN_FREE_TEXT: usize = 10;

/// Maximum length for long free-text answers.
pub const MAX_FREE_TEXT: usize = 1000;

/// Maximum length for the therapist-preference answer.
pub const MAX_PREFERENCE_TEXT: usize = 500;

/// A field failed validation.
///
/// `field` carries the wire name of the offending field so callers can
/// surface the error next to the right question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing given the state of another field.
    #[error("champ requis '{field}': {message}")]
    MissingField { field: &'static str, message: String },
    /// A present field has an out-of-range or malformed value.
    #[error("champ invalide '{field}': {message}")]
    InvalidField { field: &'static str, message: String },
}

/// The 24 Tunisian governorates offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Governorate {
    Ariana,
    #[serde(rename = "Béja")]
    Beja,
    #[serde(rename = "Ben Arous")]
    BenArous,
    Bizerte,
    #[serde(rename = "Gabès")]
    Gabes,
    Gafsa,
    Jendouba,
    Kairouan,
    Kasserine,
    #[serde(rename = "Kébili")]
    Kebili,
    #[serde(rename = "Le Kef")]
    LeKef,
    Mahdia,
    Manouba,
    #[serde(rename = "Médenine")]
    Medenine,
    Monastir,
    Nabeul,
    Sfax,
    #[serde(rename = "Sidi Bouzid")]
    SidiBouzid,
    Siliana,
    Sousse,
    Tataouine,
    Tozeur,
    Tunis,
    Zaghouan,
}

impl Governorate {
    /// Form label, as shown to the student.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ariana => "Ariana",
            Self::Beja => "Béja",
            Self::BenArous => "Ben Arous",
            Self::Bizerte => "Bizerte",
            Self::Gabes => "Gabès",
            Self::Gafsa => "Gafsa",
            Self::Jendouba => "Jendouba",
            Self::Kairouan => "Kairouan",
            Self::Kasserine => "Kasserine",
            Self::Kebili => "Kébili",
            Self::LeKef => "Le Kef",
            Self::Mahdia => "Mahdia",
            Self::Manouba => "Manouba",
            Self::Medenine => "Médenine",
            Self::Monastir => "Monastir",
            Self::Nabeul => "Nabeul",
            Self::Sfax => "Sfax",
            Self::SidiBouzid => "Sidi Bouzid",
            Self::Siliana => "Siliana",
            Self::Sousse => "Sousse",
            Self::Tataouine => "Tataouine",
            Self::Tozeur => "Tozeur",
            Self::Tunis => "Tunis",
            Self::Zaghouan => "Zaghouan",
        }
    }
}

/// Declared gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "femme")]
    Femme,
    #[serde(rename = "homme")]
    Homme,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Femme => "femme",
            Self::Homme => "homme",
        }
    }
}

/// A yes/no answer.
///
/// The form submits three spellings depending on the question
/// ("Oui"/"Non", "oui"/"non", "yes"/"no"); all deserialize into the same
/// two variants and render uniformly as "Oui"/"Non" in the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Oui", alias = "oui", alias = "yes")]
    Oui,
    #[serde(rename = "Non", alias = "non", alias = "no")]
    Non,
}

impl YesNo {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oui => "Oui",
            Self::Non => "Non",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Oui)
    }
}

/// PHQ-9 style frequency scale used by the symptom questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "Pas du tout")]
    PasDuTout,
    #[serde(rename = "Plusieurs jours")]
    PlusieursJours,
    #[serde(rename = "Plus de la moitié des jours")]
    PlusDeLaMoitieDesJours,
    #[serde(rename = "Presque tous les jours")]
    PresqueTousLesJours,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PasDuTout => "Pas du tout",
            Self::PlusieursJours => "Plusieurs jours",
            Self::PlusDeLaMoitieDesJours => "Plus de la moitié des jours",
            Self::PresqueTousLesJours => "Presque tous les jours",
        }
    }
}

/// Self-rated physical state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLevel {
    Bon,
    Moyen,
    Mauvais,
}

impl QualityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bon => "Bon",
            Self::Moyen => "Moyen",
            Self::Mauvais => "Mauvais",
        }
    }
}

/// Self-rated eating and sleep habits (feminine agreement in the form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitQuality {
    Bonnes,
    Moyennes,
    Mauvaises,
}

impl HabitQuality {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bonnes => "Bonnes",
            Self::Moyennes => "Moyennes",
            Self::Mauvaises => "Mauvaises",
        }
    }
}

/// Impact of the reported concerns on studies and daily life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyLifeImpact {
    #[serde(rename = "Pas du tout")]
    PasDuTout,
    #[serde(rename = "Un peu")]
    UnPeu,
    #[serde(rename = "Modérément")]
    Moderement,
    #[serde(rename = "Considérablement")]
    Considerablement,
    #[serde(rename = "Sévèrement")]
    Severement,
}

impl DailyLifeImpact {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PasDuTout => "Pas du tout",
            Self::UnPeu => "Un peu",
            Self::Moderement => "Modérément",
            Self::Considerablement => "Considérablement",
            Self::Severement => "Sévèrement",
        }
    }
}

/// Self-assessed urgency of the need to talk to someone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "Pas urgent")]
    PasUrgent,
    #[serde(rename = "Bientôt")]
    Bientot,
    #[serde(rename = "Dès que possible")]
    DesQuePossible,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PasUrgent => "Pas urgent",
            Self::Bientot => "Bientôt",
            Self::DesQuePossible => "Dès que possible",
        }
    }
}

/// Preferred mode of communication with a therapist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommunicationMode {
    #[serde(rename = "présentiel")]
    Presentiel,
    #[serde(rename = "vidéo")]
    Video,
    #[serde(rename = "appel")]
    Appel,
    #[serde(rename = "mixte")]
    Mixte,
    #[serde(rename = "pas de préférence")]
    PasDePreference,
}

impl CommunicationMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presentiel => "présentiel",
            Self::Video => "vidéo",
            Self::Appel => "appel",
            Self::Mixte => "mixte",
            Self::PasDePreference => "pas de préférence",
        }
    }
}

/// How long ago the last suicidal ideation occurred.
///
/// Only asked when the ideation-history answer is affirmative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdeationRecency {
    #[serde(rename = "Il y a plus d'un an")]
    PlusDunAn,
    #[serde(rename = "Il y a plus de 3 mois")]
    PlusDeTroisMois,
    #[serde(rename = "Il y a plus d'un mois")]
    PlusDunMois,
    #[serde(rename = "Il y a plus de 2 semaines")]
    PlusDeDeuxSemaines,
}

impl IdeationRecency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PlusDunAn => "Il y a plus d'un an",
            Self::PlusDeTroisMois => "Il y a plus de 3 mois",
            Self::PlusDunMois => "Il y a plus d'un mois",
            Self::PlusDeDeuxSemaines => "Il y a plus de 2 semaines",
        }
    }
}

/// Multi-select: topics the student wants therapy to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TherapyInterest {
    #[serde(rename = "stress")]
    Stress,
    #[serde(rename = "anxiety")]
    Anxiety,
    #[serde(rename = "depression")]
    Depression,
    #[serde(rename = "relationships")]
    Relationships,
    #[serde(rename = "self-esteem")]
    SelfEsteem,
    #[serde(rename = "trauma")]
    Trauma,
    #[serde(rename = "explore")]
    Explore,
    #[serde(rename = "autre")]
    Autre,
}

impl TherapyInterest {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stress => "Gestion du stress",
            Self::Anxiety => "Anxiété",
            Self::Depression => "Dépression",
            Self::Relationships => "Relations personnelles",
            Self::SelfEsteem => "Estime de soi",
            Self::Trauma => "J'ai vécu un traumatisme",
            Self::Explore => "J'explore simplement",
            Self::Autre => "Autre",
        }
    }
}

/// Multi-select: what the student expects from a therapist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TherapistExpectation {
    #[serde(rename = "listens")]
    Listens,
    #[serde(rename = "explores")]
    Explores,
    #[serde(rename = "skills")]
    Skills,
    #[serde(rename = "challenges")]
    Challenges,
    #[serde(rename = "homework")]
    Homework,
    #[serde(rename = "goals")]
    Goals,
    #[serde(rename = "checkins")]
    Checkins,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "dontknow")]
    DontKnow,
}

impl TherapistExpectation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Listens => "Écoute activement",
            Self::Explores => "Explore mon passé",
            Self::Skills => "M'enseigne de nouvelles compétences",
            Self::Challenges => "Remet en question mes croyances",
            Self::Homework => "Donne des exercices à faire",
            Self::Goals => "M'aide à fixer des objectifs",
            Self::Checkins => "Fait des suivis proactifs",
            Self::Other => "Autre",
            Self::DontKnow => "Je ne sais pas",
        }
    }
}

/// Multi-select: support formats the student would find useful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportResource {
    #[serde(rename = "consultation")]
    Consultation,
    #[serde(rename = "groupe")]
    Groupe,
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "suivi")]
    Suivi,
    #[serde(rename = "webinaires")]
    Webinaires,
    #[serde(rename = "autre-ressource")]
    AutreRessource,
    #[serde(rename = "inconnu")]
    Inconnu,
}

impl SupportResource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Consultation => "Consultation individuelle",
            Self::Groupe => "Thérapie de groupe",
            Self::Online => "Ressources en ligne",
            Self::Suivi => "Suivi d'objectifs/habitudes",
            Self::Webinaires => "Webinaires éducatifs",
            Self::AutreRessource => "Autre",
            Self::Inconnu => "Je ne sais pas",
        }
    }
}

/// A complete set of questionnaire answers.
///
/// Created fresh per submission and treated as immutable by everything
/// downstream; the serializer and matcher never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    pub governorate: Governorate,
    pub gender: Gender,
    pub age: u8,
    pub previous_therapy: YesNo,
    pub therapy_interests: Vec<TherapyInterest>,
    pub therapist_expectations: Vec<TherapistExpectation>,
    pub physical_state: QualityLevel,
    pub eating_habits: HabitQuality,
    pub current_depression: YesNo,
    pub fatigue_level: Frequency,
    pub self_esteem_issues: Frequency,
    pub concentration_issues: Frequency,
    pub suicidal_thoughts_current: Frequency,
    pub suicidal_thoughts_history: YesNo,
    /// Required when `suicidal_thoughts_history` is `Oui`; ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suicidal_thoughts_last_time: Option<IdeationRecency>,
    pub current_anxiety: YesNo,
    pub current_medication: YesNo,
    pub sleep_habits: HabitQuality,
    pub useful_resources: Vec<SupportResource>,
    pub communication_preference: CommunicationMode,
    pub emotional_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    pub impact_on_daily_life: DailyLifeImpact,
    pub therapy_goals: String,
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapist_preferences: Option<String>,
}

impl QuestionnaireAnswers {
    /// Validate the complete record.
    ///
    /// Re-checks the constraints the intake form enforces client-side, plus
    /// the cross-field invariant: an affirmative ideation history requires a
    /// recency answer. A stray recency value with a negative history is
    /// accepted and simply ignored downstream.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::InvalidField {
                field: "age",
                message: format!(
                    "l'âge doit être compris entre {} et {} ans",
                    MIN_AGE, MAX_AGE
                ),
            });
        }
        if self.therapy_interests.is_empty() {
            return Err(ValidationError::MissingField {
                field: "therapyInterests",
                message: "sélectionnez au moins un centre d'intérêt".to_string(),
            });
        }
        if self.therapist_expectations.is_empty() {
            return Err(ValidationError::MissingField {
                field: "therapistExpectations",
                message: "sélectionnez au moins une attente".to_string(),
            });
        }
        if self.useful_resources.is_empty() {
            return Err(ValidationError::MissingField {
                field: "usefulResources",
                message: "sélectionnez au moins une ressource utile".to_string(),
            });
        }
        Self::check_text(
            "emotionalState",
            &self.emotional_state,
            MIN_FREE_TEXT,
            MAX_FREE_TEXT,
        )?;
        Self::check_text(
            "therapyGoals",
            &self.therapy_goals,
            MIN_FREE_TEXT,
            MAX_FREE_TEXT,
        )?;
        if let Some(symptoms) = &self.symptoms {
            Self::check_text("symptoms", symptoms, 0, MAX_FREE_TEXT)?;
        }
        if let Some(preferences) = &self.therapist_preferences {
            Self::check_text("therapistPreferences", preferences, 0, MAX_PREFERENCE_TEXT)?;
        }
        if self.suicidal_thoughts_history.is_yes() && self.suicidal_thoughts_last_time.is_none() {
            return Err(ValidationError::MissingField {
                field: "suicidalThoughtsLastTime",
                message: "requis si vous avez déjà eu des pensées suicidaires".to_string(),
            });
        }
        Ok(())
    }

    fn check_text(
        field: &'static str,
        value: &str,
        min: usize,
        max: usize,
    ) -> Result<(), ValidationError> {
        let len = value.trim().chars().count();
        if len < min {
            return Err(ValidationError::InvalidField {
                field,
                message: format!("réponse trop courte (minimum {} caractères)", min),
            });
        }
        if len > max {
            return Err(ValidationError::InvalidField {
                field,
                message: format!("réponse trop longue (maximum {} caractères)", max),
            });
        }
        Ok(())
    }
}

/// A complete, valid record used by tests across the crate.
#[cfg(test)]
pub(crate) fn sample_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        governorate: Governorate::Tunis,
        gender: Gender::Femme,
        age: 21,
        previous_therapy: YesNo::Non,
        therapy_interests: vec![TherapyInterest::Stress, TherapyInterest::Anxiety],
        therapist_expectations: vec![TherapistExpectation::Listens],
        physical_state: QualityLevel::Moyen,
        eating_habits: HabitQuality::Moyennes,
        current_depression: YesNo::Non,
        fatigue_level: Frequency::PlusieursJours,
        self_esteem_issues: Frequency::PasDuTout,
        concentration_issues: Frequency::PlusieursJours,
        suicidal_thoughts_current: Frequency::PasDuTout,
        suicidal_thoughts_history: YesNo::Non,
        suicidal_thoughts_last_time: None,
        current_anxiety: YesNo::Oui,
        current_medication: YesNo::Non,
        sleep_habits: HabitQuality::Mauvaises,
        useful_resources: vec![SupportResource::Consultation],
        communication_preference: CommunicationMode::Video,
        emotional_state: "stressé et fatigué depuis deux semaines".to_string(),
        symptoms: None,
        impact_on_daily_life: DailyLifeImpact::Considerablement,
        therapy_goals: "mieux gérer mon stress".to_string(),
        urgency: Urgency::Bientot,
        therapist_preferences: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_record_passes() {
        assert_eq!(sample_answers().validate(), Ok(()));
    }

    #[test]
    fn age_out_of_range_is_rejected() {
        let mut answers = sample_answers();
        answers.age = 11;
        match answers.validate() {
            Err(ValidationError::InvalidField { field, .. }) => assert_eq!(field, "age"),
            other => panic!("expected age error, got {:?}", other),
        }
    }

    #[test]
    fn affirmative_history_requires_recency() {
        let mut answers = sample_answers();
        answers.suicidal_thoughts_history = YesNo::Oui;
        answers.suicidal_thoughts_last_time = None;
        match answers.validate() {
            Err(ValidationError::MissingField { field, .. }) => {
                assert_eq!(field, "suicidalThoughtsLastTime");
            }
            other => panic!("expected missing recency error, got {:?}", other),
        }

        answers.suicidal_thoughts_last_time = Some(IdeationRecency::PlusDunAn);
        assert_eq!(answers.validate(), Ok(()));
    }

    #[test]
    fn stray_recency_with_negative_history_is_tolerated() {
        let mut answers = sample_answers();
        answers.suicidal_thoughts_history = YesNo::Non;
        answers.suicidal_thoughts_last_time = Some(IdeationRecency::PlusDeDeuxSemaines);
        assert_eq!(answers.validate(), Ok(()));
    }

    #[test]
    fn short_free_text_is_rejected() {
        let mut answers = sample_answers();
        answers.therapy_goals = "aide".to_string();
        match answers.validate() {
            Err(ValidationError::InvalidField { field, .. }) => {
                assert_eq!(field, "therapyGoals");
            }
            other => panic!("expected therapyGoals error, got {:?}", other),
        }
    }

    #[test]
    fn short_text_message_reports_the_configured_minimum() {
        let mut answers = sample_answers();
        answers.emotional_state = "court".to_string();
        match answers.validate() {
            Err(ValidationError::InvalidField { field, message }) => {
                assert_eq!(field, "emotionalState");
                assert!(
                    message.contains(&format!("minimum {} caractères", MIN_FREE_TEXT)),
                    "message should carry the limit: {}",
                    message
                );
            }
            other => panic!("expected emotionalState error, got {:?}", other),
        }
    }

    #[test]
    fn empty_multi_select_is_rejected() {
        let mut answers = sample_answers();
        answers.therapy_interests.clear();
        match answers.validate() {
            Err(ValidationError::MissingField { field, .. }) => {
                assert_eq!(field, "therapyInterests");
            }
            other => panic!("expected therapyInterests error, got {:?}", other),
        }
    }

    #[test]
    fn deserializes_the_form_wire_format() {
        let json = serde_json::json!({
            "governorate": "Sidi Bouzid",
            "gender": "femme",
            "age": 21,
            "previousTherapy": "yes",
            "therapyInterests": ["stress", "self-esteem"],
            "therapistExpectations": ["listens", "dontknow"],
            "physicalState": "Moyen",
            "eatingHabits": "Moyennes",
            "currentDepression": "Non",
            "fatigueLevel": "Plusieurs jours",
            "selfEsteemIssues": "Pas du tout",
            "concentrationIssues": "Plus de la moitié des jours",
            "suicidalThoughtsCurrent": "Pas du tout",
            "suicidalThoughtsHistory": "oui",
            "suicidalThoughtsLastTime": "Il y a plus d'un an",
            "currentAnxiety": "Oui",
            "currentMedication": "Non",
            "sleepHabits": "Mauvaises",
            "usefulResources": ["consultation", "online"],
            "communicationPreference": "pas de préférence",
            "emotionalState": "souvent triste et irritable ces derniers temps",
            "impactOnDailyLife": "Considérablement",
            "therapyGoals": "retrouver un meilleur équilibre au quotidien",
            "urgency": "Dès que possible"
        });
        let answers: QuestionnaireAnswers = serde_json::from_value(json).unwrap();
        assert_eq!(answers.governorate, Governorate::SidiBouzid);
        assert_eq!(answers.previous_therapy, YesNo::Oui);
        assert_eq!(answers.suicidal_thoughts_history, YesNo::Oui);
        assert_eq!(
            answers.suicidal_thoughts_last_time,
            Some(IdeationRecency::PlusDunAn)
        );
        assert_eq!(answers.symptoms, None);
        assert_eq!(answers.validate(), Ok(()));
    }

    #[test]
    fn yes_no_serializes_canonically() {
        assert_eq!(serde_json::to_value(YesNo::Oui).unwrap(), "Oui");
        assert_eq!(serde_json::to_value(YesNo::Non).unwrap(), "Non");
    }
}
