use crate::content::FaqItem;
use crate::i18n::{Locale, MessageKey, Translator};

const ITEMS: [(&str, MessageKey, MessageKey); 6] = [
    ("1", MessageKey::FaqProcessQuestion, MessageKey::FaqProcessAnswer),
    ("2", MessageKey::FaqTimelineQuestion, MessageKey::FaqTimelineAnswer),
    ("3", MessageKey::FaqPricingQuestion, MessageKey::FaqPricingAnswer),
    ("4", MessageKey::FaqSupportQuestion, MessageKey::FaqSupportAnswer),
    (
        "5",
        MessageKey::FaqTechnologiesQuestion,
        MessageKey::FaqTechnologiesAnswer,
    ),
    ("6", MessageKey::FaqRevisionsQuestion, MessageKey::FaqRevisionsAnswer),
];

/// FAQ accordion entries for a locale.
pub fn faq(locale: Locale) -> Vec<FaqItem> {
    let t = Translator::new(locale);
    ITEMS
        .iter()
        .map(|(id, question, answer)| FaqItem {
            id: *id,
            question: t.t(*question),
            answer: t.t(*answer),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_has_six_items_in_every_locale() {
        for locale in Locale::ALL {
            let items = faq(locale);
            assert_eq!(items.len(), 6);
            assert!(items.iter().all(|i| !i.question.is_empty() && !i.answer.is_empty()));
        }
    }

    #[test]
    fn test_faq_ids_are_ordered() {
        let ids: Vec<_> = faq(Locale::En).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }
}
