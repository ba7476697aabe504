/// Target audience of a visit plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecializationKind {
    Cardiology,
    Therapy,
    Pediatrics,
    Pharmacy,
}

impl SpecializationKind {
    /// Classifies a free-text specialization label.
    ///
    /// Matching is case-insensitive on keyword fragments, so "Cardiologists"
    /// and "cardio reps" land on the same kind. Labels that match nothing
    /// fall back to `Therapy`.
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("cardio") {
            SpecializationKind::Cardiology
        } else if lower.contains("pediatr") || lower.contains("paediatr") {
            SpecializationKind::Pediatrics
        } else if lower.contains("pharma") {
            SpecializationKind::Pharmacy
        } else {
            SpecializationKind::Therapy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpecializationKind::Cardiology => "cardiology",
            SpecializationKind::Therapy => "therapy",
            SpecializationKind::Pediatrics => "pediatrics",
            SpecializationKind::Pharmacy => "pharmacy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_keyword_fragments() {
        assert_eq!(
            SpecializationKind::classify("Cardiologists"),
            SpecializationKind::Cardiology
        );
        assert_eq!(
            SpecializationKind::classify("pediatricians"),
            SpecializationKind::Pediatrics
        );
        assert_eq!(
            SpecializationKind::classify("paediatric wards"),
            SpecializationKind::Pediatrics
        );
        assert_eq!(
            SpecializationKind::classify("Pharmacies"),
            SpecializationKind::Pharmacy
        );
        assert_eq!(
            SpecializationKind::classify("therapists"),
            SpecializationKind::Therapy
        );
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(
            SpecializationKind::classify("CARDIOLOGY"),
            SpecializationKind::classify("cardiology")
        );
    }

    #[test]
    fn unknown_label_falls_back_to_therapy() {
        assert_eq!(
            SpecializationKind::classify("orthodontists"),
            SpecializationKind::Therapy
        );
        assert_eq!(SpecializationKind::classify(""), SpecializationKind::Therapy);
    }
}
