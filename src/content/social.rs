use crate::content::{Stat, Testimonial};
use crate::i18n::{Locale, MessageKey, Translator};

/// Client testimonials. Names and companies are not translated.
pub fn testimonials(locale: Locale) -> Vec<Testimonial> {
    let t = Translator::new(locale);
    vec![
        Testimonial {
            id: "1",
            name: "Alexandru Popescu",
            role: "CEO",
            company: "Vendi Imobiliare",
            text: t.t(MessageKey::SocialProofTestimonialsVendi),
            rating: 5,
        },
        Testimonial {
            id: "2",
            name: "Maria Ionescu",
            role: "Founder",
            company: "Chirie Auto MD",
            text: t.t(MessageKey::SocialProofTestimonialsChirie),
            rating: 5,
        },
        Testimonial {
            id: "3",
            name: "Ivan Petrov",
            role: "Director",
            company: "LegalGrup SRL",
            text: t.t(MessageKey::SocialProofTestimonialsLegalgrup),
            rating: 5,
        },
    ]
}

pub fn stats(locale: Locale) -> Vec<Stat> {
    let t = Translator::new(locale);
    vec![
        Stat {
            id: "1",
            value: "50+",
            label: t.t(MessageKey::SocialProofStatsProjects),
        },
        Stat {
            id: "2",
            value: "98%",
            label: t.t(MessageKey::SocialProofStatsSatisfaction),
        },
        Stat {
            id: "3",
            value: "5+",
            label: t.t(MessageKey::SocialProofStatsYears),
        },
        Stat {
            id: "4",
            value: "24/7",
            label: t.t(MessageKey::SocialProofStatsSupport),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonials_are_five_star() {
        assert!(testimonials(Locale::En).iter().all(|t| t.rating == 5));
    }

    #[test]
    fn test_testimonial_text_is_localized() {
        let en = testimonials(Locale::En);
        let ru = testimonials(Locale::Ru);
        assert_eq!(en[0].name, ru[0].name);
        assert_ne!(en[0].text, ru[0].text);
    }

    #[test]
    fn test_stats_labels() {
        let stats = stats(Locale::Rom);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[3].value, "24/7");
        assert_eq!(stats[3].label, "Suport");
    }
}
