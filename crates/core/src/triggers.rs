//! Trigger term scanning over free-text clinical notes.
//!
//! A trigger term is a clinical keyword or phrase whose presence in a note contributes to the
//! diabetes risk score. Matching is plain substring containment on the lowercased note text, so
//! a multi-word term such as `hémoglobine a1c` must appear verbatim (ignoring case).
//!
//! The vocabulary is supplied from configuration and never mutated after construction.

use std::collections::BTreeSet;

use crate::constants::DEFAULT_TRIGGER_TERMS;
use crate::note::Note;
use crate::{CoreError, CoreResult};

/// Ordered, immutable set of lowercase trigger terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerVocabulary {
    terms: Vec<String>,
}

impl TriggerVocabulary {
    /// Build a vocabulary from configured terms.
    ///
    /// Each term is trimmed and lowercased. Blank entries and duplicates are dropped, keeping the
    /// first occurrence so scan order follows the configured order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if no usable term remains.
    pub fn new<I, S>(terms: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalised: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() || normalised.contains(&term) {
                continue;
            }
            normalised.push(term);
        }

        if normalised.is_empty() {
            return Err(CoreError::InvalidInput(
                "trigger vocabulary cannot be empty".into(),
            ));
        }

        Ok(Self { terms: normalised })
    }

    /// Iterate the terms in scan order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Return the vocabulary terms found in `text`.
    ///
    /// Absent or empty text yields the empty set.
    pub fn extract_triggers(&self, text: Option<&str>) -> BTreeSet<&str> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return BTreeSet::new(),
        };

        let lower = text.to_lowercase();
        self.terms()
            .filter(|term| lower.contains(*term))
            .collect()
    }

    /// Count the distinct terms found across every note.
    ///
    /// Terms are unioned before counting, so a term repeated within one note or across several
    /// notes contributes once.
    pub fn count_triggers(&self, notes: &[Note]) -> usize {
        notes
            .iter()
            .flat_map(|note| self.extract_triggers(note.report.as_deref()))
            .collect::<BTreeSet<_>>()
            .len()
    }
}

impl Default for TriggerVocabulary {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TRIGGER_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dra_types::PatientId;

    fn note(text: Option<&str>) -> Note {
        Note::new(PatientId::new(1).unwrap(), text.map(str::to_string))
    }

    #[test]
    fn default_vocabulary_has_eleven_terms_in_order() {
        let vocab = TriggerVocabulary::default();
        assert_eq!(vocab.len(), 11);
        assert_eq!(vocab.terms().next(), Some("hémoglobine a1c"));
        assert_eq!(vocab.terms().last(), Some("anticorps"));
    }

    #[test]
    fn new_normalises_and_deduplicates() {
        let vocab = TriggerVocabulary::new(["  Fumeur ", "", "fumeur", "POIDS"]).unwrap();
        assert_eq!(vocab.terms().collect::<Vec<_>>(), vec!["fumeur", "poids"]);
    }

    #[test]
    fn new_rejects_blank_vocabulary() {
        let err = TriggerVocabulary::new(["", "   "]).expect_err("expected empty vocabulary");
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn absent_or_empty_text_has_no_triggers() {
        let vocab = TriggerVocabulary::default();
        assert!(vocab.extract_triggers(None).is_empty());
        assert!(vocab.extract_triggers(Some("")).is_empty());
    }

    #[test]
    fn matching_ignores_case_including_accented_letters() {
        let vocab = TriggerVocabulary::default();
        let upper = vocab.extract_triggers(Some("Tests show HÉMOGLOBINE A1C"));
        let lower = vocab.extract_triggers(Some("tests show hémoglobine a1c"));
        assert_eq!(upper, lower);
        assert!(upper.contains("hémoglobine a1c"));
    }

    #[test]
    fn multi_word_terms_must_appear_verbatim() {
        let vocab = TriggerVocabulary::default();
        let found = vocab.extract_triggers(Some("hémoglobine élevée, a1c normale"));
        assert!(!found.contains("hémoglobine a1c"));
    }

    #[test]
    fn matching_is_substring_not_token_based() {
        let vocab = TriggerVocabulary::default();
        let found = vocab.extract_triggers(Some("Résultats anormaux"));
        assert!(found.contains("anormal"));
    }

    #[test]
    fn count_is_distinct_across_notes() {
        let vocab = TriggerVocabulary::default();
        let notes = vec![
            note(Some("Cholestérol élevé. Cholestérol à surveiller.")),
            note(Some("cholestérol stable, vertige signalé")),
            note(Some("Cholestérol")),
        ];
        assert_eq!(vocab.count_triggers(&notes), 2);
    }

    #[test]
    fn count_tolerates_missing_text() {
        let vocab = TriggerVocabulary::default();
        let notes = vec![note(None), note(Some("")), note(Some("Fumeur"))];
        assert_eq!(vocab.count_triggers(&notes), 1);
        assert_eq!(vocab.count_triggers(&[]), 0);
    }
}
