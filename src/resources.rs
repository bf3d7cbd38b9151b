//! Static well-being resources and emergency contacts.
//!
//! Read-only catalogs served as-is through the HTTP surface; nothing here
//! is persisted or mutated at runtime.

use serde::Serialize;

/// A self-help article, guide, or tip sheet.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// A crisis line or emergency service.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub description: &'static str,
    pub availability: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
}

/// The resource library shown on the resources page.
pub const RESOURCE_CATALOG: &[ResourceEntry] = &[
    ResourceEntry {
        title: "Comprendre l'Anxiété",
        description: "Un guide complet pour identifier, comprendre et gérer les troubles anxieux.",
        category: "Articles",
    },
    ResourceEntry {
        title: "Conseils pour un Meilleur Sommeil",
        description: "Des stratégies pratiques pour améliorer la qualité de votre sommeil et combattre l'insomnie.",
        category: "Guides",
    },
    ResourceEntry {
        title: "Gérer le Stress des Examens",
        description: "Techniques de relaxation et d'organisation pour aborder les périodes d'examens sereinement.",
        category: "Articles",
    },
    ResourceEntry {
        title: "Introduction à la Pleine Conscience",
        description: "Découvrez les bases de la méditation de pleine conscience et ses bienfaits pour la santé mentale.",
        category: "Guides",
    },
    ResourceEntry {
        title: "L'Importance de l'Activité Physique",
        description: "Comment l'exercice physique peut positivement impacter votre humeur et votre bien-être général.",
        category: "Conseils",
    },
    ResourceEntry {
        title: "Maintenir des Relations Sociales Saines",
        description: "Conseils pour cultiver des amitiés et des relations enrichissantes pendant vos études.",
        category: "Conseils",
    },
];

/// Emergency and crisis-line contacts.
pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "SAMU (Urgence Médicale)",
        phone: "190",
        description: "Pour les urgences médicales vitales en Tunisie.",
        availability: "24/7",
        website: None,
    },
    EmergencyContact {
        name: "Police Secours",
        phone: "197",
        description: "En cas de danger immédiat pour vous-même ou autrui.",
        availability: "24/7",
        website: None,
    },
    EmergencyContact {
        name: "Protection Civile",
        phone: "198",
        description: "Secours et assistance en situation d'urgence.",
        availability: "24/7",
        website: None,
    },
    EmergencyContact {
        name: "Ligne d'écoute psychologique",
        phone: "80 10 50 50",
        description: "Ligne d'écoute gratuite pour les personnes en détresse psychologique.",
        availability: "Horaires variables",
        website: None,
    },
];
