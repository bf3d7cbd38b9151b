//! Narrative rendering of questionnaire answers.
//!
//! The matching model reasons over a single French text blob, and its
//! output quality depends on that blob keeping the same shape from one
//! submission to the next. Every field therefore renders on its own
//! labeled line in a fixed order, with unanswered optional fields shown
//! as an explicit placeholder instead of being dropped. The one
//! exception is the ideation-recency line, which only exists when the
//! history answer is affirmative.

use super::answers::QuestionnaireAnswers;

/// Placeholder for an unanswered optional field.
pub const NOT_SPECIFIED: &str = "Non spécifié";

/// Placeholder for an empty therapist-preference answer.
pub const NO_PREFERENCE: &str = "Aucune";

/// Render a complete answer record into the narrative fed to the model.
///
/// Pure and deterministic: identical input yields a byte-identical string.
/// The record is expected to have passed [`QuestionnaireAnswers::validate`];
/// rendering an unvalidated record still succeeds but may embed answers the
/// form would have rejected.
pub fn render_narrative(answers: &QuestionnaireAnswers) -> String {
    let mut text = String::with_capacity(1024);

    text.push_str("Informations Démographiques:\n");
    push_line(&mut text, "Gouvernorat", answers.governorate.label());
    push_line(&mut text, "Sexe", answers.gender.label());
    push_line(&mut text, "Âge", &answers.age.to_string());

    text.push_str("\nExpérience et Préférences Thérapeutiques:\n");
    push_line(
        &mut text,
        "Consultation antérieure d'un thérapeute",
        answers.previous_therapy.label(),
    );
    push_line(
        &mut text,
        "Principaux centres d'intérêt pour cette thérapie",
        &join_or_placeholder(answers.therapy_interests.iter().map(|i| i.label())),
    );
    push_line(
        &mut text,
        "Attentes envers le thérapeute",
        &join_or_placeholder(answers.therapist_expectations.iter().map(|e| e.label())),
    );
    push_line(
        &mut text,
        "Objectifs thérapeutiques (texte libre)",
        answers.therapy_goals.trim(),
    );
    push_line(
        &mut text,
        "Préférences pour le thérapeute (texte libre)",
        optional_text(answers.therapist_preferences.as_deref(), NO_PREFERENCE),
    );
    push_line(
        &mut text,
        "Mode de communication préféré",
        answers.communication_preference.label(),
    );
    push_line(&mut text, "Urgence du besoin", answers.urgency.label());

    text.push_str("\nÉtat Actuel et Symptômes:\n");
    push_line(
        &mut text,
        "État physique actuel",
        answers.physical_state.label(),
    );
    push_line(
        &mut text,
        "Habitudes alimentaires actuelles",
        answers.eating_habits.label(),
    );
    push_line(
        &mut text,
        "Habitudes de sommeil actuelles",
        answers.sleep_habits.label(),
    );
    push_line(
        &mut text,
        "Dépression, tristesse, chagrin accablant actuellement",
        answers.current_depression.label(),
    );
    push_line(
        &mut text,
        "Fatigue ou manque d'énergie",
        answers.fatigue_level.label(),
    );
    push_line(
        &mut text,
        "Mauvaise estime de soi / sentiment d'échec",
        answers.self_esteem_issues.label(),
    );
    push_line(
        &mut text,
        "Difficultés de concentration",
        answers.concentration_issues.label(),
    );
    push_line(
        &mut text,
        "Pensées suicidaires ou de se faire du mal actuellement",
        answers.suicidal_thoughts_current.label(),
    );
    push_line(
        &mut text,
        "Historique de pensées suicidaires",
        answers.suicidal_thoughts_history.label(),
    );
    // Conditional: rendered only for an affirmative history, never as a
    // placeholder. A stray recency value with a negative history is ignored.
    if answers.suicidal_thoughts_history.is_yes() {
        if let Some(recency) = answers.suicidal_thoughts_last_time {
            push_line(
                &mut text,
                "Dernière fois des pensées suicidaires",
                recency.label(),
            );
        }
    }
    push_line(
        &mut text,
        "Anxiété, crises de panique ou phobies actuellement",
        answers.current_anxiety.label(),
    );
    push_line(
        &mut text,
        "Traitement médicamenteux actuel",
        answers.current_medication.label(),
    );
    push_line(
        &mut text,
        "État émotionnel général récent (texte libre)",
        answers.emotional_state.trim(),
    );
    push_line(
        &mut text,
        "Symptômes spécifiques rencontrés (texte libre)",
        optional_text(answers.symptoms.as_deref(), NOT_SPECIFIED),
    );
    push_line(
        &mut text,
        "Impact sur la vie quotidienne",
        answers.impact_on_daily_life.label(),
    );

    text.push_str("\nRessources et Support:\n");
    push_line(
        &mut text,
        "Ressources utiles souhaitées",
        &join_or_placeholder(answers.useful_resources.iter().map(|r| r.label())),
    );

    text
}

fn push_line(text: &mut String, label: &str, value: &str) {
    text.push_str("- ");
    text.push_str(label);
    text.push_str(": ");
    text.push_str(value);
    text.push('\n');
}

fn join_or_placeholder<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        joined
    }
}

fn optional_text<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => placeholder,
    }
}
