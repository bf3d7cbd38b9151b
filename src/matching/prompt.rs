//! Instruction template for the matching prompt.
//!
//! The template is static apart from the single `{questionnaire_answers}`
//! substitution point; no other dynamic content is injected. The narrative
//! itself is user-controlled free text, which is an accepted trust boundary
//! of the matching flow.

/// Fixed instruction template addressed to the matching model.
pub const MATCH_PROMPT_TEMPLATE: &str = "\
You are an expert mental health professional specializing in matching students in Tunisia with suitable therapists based on their questionnaire answers.
Your goal is to provide a thoughtful and personalized therapist suggestion.

Please analyze the following student questionnaire answers:
{questionnaire_answers}

Based on these answers, provide:
1.  **Therapist Suggestion**: Recommend a type of therapist or specialization that would be most beneficial. Be specific (e.g., \"Un psychologue clinicien avec une expertise en troubles anxieux et dépressifs\", \"Un thérapeute TCC (Thérapie Comportementale et Cognitive) orienté vers la gestion du stress et l'amélioration de l'estime de soi\", \"Un conseiller en santé mentale pour étudiants pour l'exploration et le soutien général\").
2.  **Reasoning**: Explain clearly and concisely why you are making this suggestion. Refer to specific information from the questionnaire to justify your choice. Highlight how the suggested therapist type aligns with the student's expressed needs, concerns, history, and preferences. For example, if they mention specific symptoms like anxiety and concentration issues, explain how the therapist type can help with those. If they have preferences for therapist expectations (e.g., \"explore mon passé\", \"m'enseigne de nouvelles compétences\"), mention how the suggested therapist might meet these. Consider their location (gouvernorat) if suggesting in-person options, though the primary focus is on the type of help needed.

IMPORTANT: Focus on suggesting the *type* of therapist and *why*, rather than a specific named individual. The platform will handle connecting them to actual therapists later.
Your response should be empathetic and supportive in tone.
Ensure the reasoning directly links back to the questionnaire data provided.
";

/// Embed a narrative into the instruction template.
pub fn compose(narrative: &str) -> String {
    MATCH_PROMPT_TEMPLATE.replace("{questionnaire_answers}", narrative)
}
