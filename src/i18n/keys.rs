//! Message identifiers for translation lookup.
//!
//! `MessageKey` is the closed set of every translatable message. Lookup is an
//! exhaustive `match` over the typed [`LocaleStrings`] table, so adding a key
//! without adding it to every locale is a compile error rather than a missing
//! string at runtime.

use crate::i18n::LocaleStrings;

macro_rules! message_keys {
    ($($variant:ident => $field:ident, $path:literal;)+) => {
        /// Identifier of a single translatable message.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            /// Every message key, in table order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// Dotted path of this key, e.g. `contact.form.errors.emailReq`.
            pub fn path(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $path,)+
                }
            }
        }

        impl LocaleStrings {
            /// Raw lookup of a message in this table.
            pub fn get(&self, key: MessageKey) -> &'static str {
                match key {
                    $(MessageKey::$variant => self.$field,)+
                }
            }
        }
    };
}

message_keys! {
    NavHome => nav_home, "nav.home";
    NavStack => nav_stack, "nav.stack";
    NavExperience => nav_experience, "nav.experience";
    NavPortfolio => nav_portfolio, "nav.portfolio";
    NavFaq => nav_faq, "nav.faq";
    NavCta => nav_cta, "nav.cta";

    HeroTitlePre => hero_title_pre, "hero.titlePre";
    HeroTitleHighlight => hero_title_highlight, "hero.titleHighlight";
    HeroSubtitle => hero_subtitle, "hero.subtitle";
    HeroScroll => hero_scroll, "hero.scroll";

    TechKicker => tech_kicker, "tech.kicker";
    TechTitle => tech_title, "tech.title";
    TechSubtitle => tech_subtitle, "tech.subtitle";

    ExperienceKicker => experience_kicker, "experience.kicker";
    ExperienceTitle => experience_title, "experience.title";
    ExperienceSubtitle => experience_subtitle, "experience.subtitle";

    PortfolioKicker => portfolio_kicker, "portfolio.kicker";
    PortfolioTitle => portfolio_title, "portfolio.title";
    PortfolioSubtitle => portfolio_subtitle, "portfolio.subtitle";
    PortfolioViewLive => portfolio_view_live, "portfolio.viewLive";
    PortfolioAbout => portfolio_about, "portfolio.about";
    PortfolioTechnologies => portfolio_technologies, "portfolio.technologies";
    PortfolioAll => portfolio_all, "portfolio.all";
    PortfolioLoading => portfolio_loading, "portfolio.loading";
    PortfolioBack => portfolio_back, "portfolio.back";

    SocialProofKicker => social_proof_kicker, "socialProof.kicker";
    SocialProofTitle => social_proof_title, "socialProof.title";
    SocialProofStatsProjects => social_proof_stats_projects, "socialProof.stats.projects";
    SocialProofStatsSatisfaction => social_proof_stats_satisfaction, "socialProof.stats.satisfaction";
    SocialProofStatsYears => social_proof_stats_years, "socialProof.stats.years";
    SocialProofStatsSupport => social_proof_stats_support, "socialProof.stats.support";
    SocialProofTestimonialsVendi => social_proof_testimonials_vendi, "socialProof.testimonials.vendi";
    SocialProofTestimonialsChirie => social_proof_testimonials_chirie, "socialProof.testimonials.chirie";
    SocialProofTestimonialsLegalgrup => social_proof_testimonials_legalgrup, "socialProof.testimonials.legalgrup";

    FaqKicker => faq_kicker, "faq.kicker";
    FaqTitle => faq_title, "faq.title";
    FaqProcessQuestion => faq_process_question, "faq.items.process.question";
    FaqProcessAnswer => faq_process_answer, "faq.items.process.answer";
    FaqTimelineQuestion => faq_timeline_question, "faq.items.timeline.question";
    FaqTimelineAnswer => faq_timeline_answer, "faq.items.timeline.answer";
    FaqPricingQuestion => faq_pricing_question, "faq.items.pricing.question";
    FaqPricingAnswer => faq_pricing_answer, "faq.items.pricing.answer";
    FaqSupportQuestion => faq_support_question, "faq.items.support.question";
    FaqSupportAnswer => faq_support_answer, "faq.items.support.answer";
    FaqTechnologiesQuestion => faq_technologies_question, "faq.items.technologies.question";
    FaqTechnologiesAnswer => faq_technologies_answer, "faq.items.technologies.answer";
    FaqRevisionsQuestion => faq_revisions_question, "faq.items.revisions.question";
    FaqRevisionsAnswer => faq_revisions_answer, "faq.items.revisions.answer";

    ContactTitlePre => contact_title_pre, "contact.titlePre";
    ContactTitleHighlight => contact_title_highlight, "contact.titleHighlight";
    ContactSubtitle => contact_subtitle, "contact.subtitle";
    ContactFormName => contact_form_name, "contact.form.name";
    ContactFormNamePh => contact_form_name_ph, "contact.form.namePh";
    ContactFormEmail => contact_form_email, "contact.form.email";
    ContactFormEmailPh => contact_form_email_ph, "contact.form.emailPh";
    ContactFormMessage => contact_form_message, "contact.form.message";
    ContactFormMessagePh => contact_form_message_ph, "contact.form.messagePh";
    ContactFormSubmit => contact_form_submit, "contact.form.submit";
    ContactFormSuccessTitle => contact_form_success_title, "contact.form.successTitle";
    ContactFormSuccessText => contact_form_success_text, "contact.form.successText";
    ContactFormSendAgain => contact_form_send_again, "contact.form.sendAgain";
    ContactFormFallbackText => contact_form_fallback_text, "contact.form.fallbackText";
    ContactFormFallbackLink => contact_form_fallback_link, "contact.form.fallbackLink";
    ContactFormErrorsNameReq => contact_form_errors_name_req, "contact.form.errors.nameReq";
    ContactFormErrorsEmailReq => contact_form_errors_email_req, "contact.form.errors.emailReq";
    ContactFormErrorsEmailInv => contact_form_errors_email_inv, "contact.form.errors.emailInv";
    ContactFormErrorsMsgReq => contact_form_errors_msg_req, "contact.form.errors.msgReq";
    ContactMailSubject => contact_mail_subject, "contact.mailSubject";

    NotFoundTitle => not_found_title, "notFound.title";
    NotFoundText => not_found_text, "notFound.text";
    FooterRights => footer_rights, "footer.rights";
}
