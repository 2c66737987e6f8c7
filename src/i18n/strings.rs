/// All user-facing strings for one locale.
///
/// Strings are stored raw and unescaped. The renderer escapes them for HTML.
/// Field names mirror the dotted keys of [`MessageKey`](crate::i18n::MessageKey).
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_stack: &'static str,
    pub nav_experience: &'static str,
    pub nav_portfolio: &'static str,
    pub nav_faq: &'static str,
    /// Call-to-action button that jumps to the contact form
    pub nav_cta: &'static str,

    // ==================== Hero ====================
    pub hero_title_pre: &'static str,
    pub hero_title_highlight: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_scroll: &'static str,

    // ==================== Tech Stack ====================
    pub tech_kicker: &'static str,
    pub tech_title: &'static str,
    pub tech_subtitle: &'static str,

    // ==================== Process ====================
    pub experience_kicker: &'static str,
    pub experience_title: &'static str,
    pub experience_subtitle: &'static str,

    // ==================== Portfolio ====================
    pub portfolio_kicker: &'static str,
    pub portfolio_title: &'static str,
    pub portfolio_subtitle: &'static str,
    pub portfolio_view_live: &'static str,
    pub portfolio_about: &'static str,
    pub portfolio_technologies: &'static str,
    /// Label of the category filter that shows every project
    pub portfolio_all: &'static str,
    /// Placeholder shown while a live screenshot is loading
    pub portfolio_loading: &'static str,
    pub portfolio_back: &'static str,

    // ==================== Social Proof ====================
    pub social_proof_kicker: &'static str,
    pub social_proof_title: &'static str,
    pub social_proof_stats_projects: &'static str,
    pub social_proof_stats_satisfaction: &'static str,
    pub social_proof_stats_years: &'static str,
    pub social_proof_stats_support: &'static str,
    pub social_proof_testimonials_vendi: &'static str,
    pub social_proof_testimonials_chirie: &'static str,
    pub social_proof_testimonials_legalgrup: &'static str,

    // ==================== FAQ ====================
    pub faq_kicker: &'static str,
    pub faq_title: &'static str,
    pub faq_process_question: &'static str,
    pub faq_process_answer: &'static str,
    pub faq_timeline_question: &'static str,
    pub faq_timeline_answer: &'static str,
    pub faq_pricing_question: &'static str,
    pub faq_pricing_answer: &'static str,
    pub faq_support_question: &'static str,
    pub faq_support_answer: &'static str,
    pub faq_technologies_question: &'static str,
    pub faq_technologies_answer: &'static str,
    pub faq_revisions_question: &'static str,
    pub faq_revisions_answer: &'static str,

    // ==================== Contact ====================
    pub contact_title_pre: &'static str,
    pub contact_title_highlight: &'static str,
    pub contact_subtitle: &'static str,
    pub contact_form_name: &'static str,
    pub contact_form_name_ph: &'static str,
    pub contact_form_email: &'static str,
    pub contact_form_email_ph: &'static str,
    pub contact_form_message: &'static str,
    pub contact_form_message_ph: &'static str,
    pub contact_form_submit: &'static str,
    pub contact_form_success_title: &'static str,
    pub contact_form_success_text: &'static str,
    pub contact_form_send_again: &'static str,
    /// Shown with the mailto link when the relay could not deliver
    pub contact_form_fallback_text: &'static str,
    pub contact_form_fallback_link: &'static str,
    pub contact_form_errors_name_req: &'static str,
    pub contact_form_errors_email_req: &'static str,
    pub contact_form_errors_email_inv: &'static str,
    pub contact_form_errors_msg_req: &'static str,
    /// Subject of the fallback email
    /// Placeholders: {name}
    pub contact_mail_subject: &'static str,

    // ==================== Other ====================
    pub not_found_title: &'static str,
    pub not_found_text: &'static str,
    pub footer_rights: &'static str,
}

// ==================== English Strings ====================

/// English strings (default locale)
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Home",
    nav_stack: "Stack",
    nav_experience: "Experience",
    nav_portfolio: "Portfolio",
    nav_faq: "FAQ",
    nav_cta: "Start a Project",

    hero_title_pre: "Building the",
    hero_title_highlight: "Digital Future.",
    hero_subtitle: "RevOrgs is a premier web studio crafting immersive digital experiences, \
robust platforms, and brand-defining interfaces for forward-thinking organizations.",
    hero_scroll: "Scroll",

    tech_kicker: "Our Arsenal",
    tech_title: "Technologies We Master",
    tech_subtitle: "The best digital experiences are built on solid foundations. \
We select the right tools for the job.",

    experience_kicker: "Our Process",
    experience_title: "How We Work",
    experience_subtitle: "From the first spark of an idea to the final deployed product, \
our workflow is designed for transparency, efficiency, and excellence.",

    portfolio_kicker: "Selected Work",
    portfolio_title: "Digital Marketplace",
    portfolio_subtitle: "Explore our curated collection of successful deployments and digital products.",
    portfolio_view_live: "View Live Site",
    portfolio_about: "About Project",
    portfolio_technologies: "Technologies",
    portfolio_all: "All",
    portfolio_loading: "Loading...",
    portfolio_back: "Back to portfolio",

    social_proof_kicker: "Trusted Partners",
    social_proof_title: "What Our Clients Say",
    social_proof_stats_projects: "Projects Delivered",
    social_proof_stats_satisfaction: "Client Satisfaction",
    social_proof_stats_years: "Years of Experience",
    social_proof_stats_support: "Support",
    social_proof_testimonials_vendi: "RevOrgs turned a complex property catalogue into a marketplace \
our customers actually enjoy using. Listings went live faster than we planned.",
    social_proof_testimonials_chirie: "The booking flow they built is fast on every phone. \
Reservations doubled in the first season after launch.",
    social_proof_testimonials_legalgrup: "A precise, professional team. Our new site finally \
reflects the standard of service we offer our clients.",

    faq_kicker: "Questions",
    faq_title: "Frequently Asked Questions",
    faq_process_question: "What does your process look like?",
    faq_process_answer: "We move through discovery, strategy, design, development and launch. \
Every phase ends with a review so you always know where the project stands.",
    faq_timeline_question: "How long does a typical project take?",
    faq_timeline_answer: "A marketing site usually takes 4 to 6 weeks. Platforms and marketplaces \
take 2 to 4 months depending on scope and integrations.",
    faq_pricing_question: "How do you price projects?",
    faq_pricing_answer: "Each project gets a fixed quote after discovery, split into milestones. \
There are no hidden fees and changes in scope are agreed in writing.",
    faq_support_question: "Do you offer support after launch?",
    faq_support_answer: "Yes. Every project includes 30 days of free support, and we offer \
monthly maintenance plans for updates, monitoring and improvements.",
    faq_technologies_question: "Which technologies do you use?",
    faq_technologies_answer: "We mostly build with React, Next.js, TypeScript and Node.js, \
and choose the stack that best fits each product.",
    faq_revisions_question: "How many design revisions are included?",
    faq_revisions_answer: "Two rounds of revisions are included at every design stage. \
Additional rounds can be added when needed.",

    contact_title_pre: "Let's build something",
    contact_title_highlight: "legendary.",
    contact_subtitle: "Ready to transform your digital presence? \
We are currently accepting new partnerships for Q4 2024.",
    contact_form_name: "Name",
    contact_form_name_ph: "John Doe",
    contact_form_email: "Email",
    contact_form_email_ph: "john@example.com",
    contact_form_message: "Message",
    contact_form_message_ph: "Tell us about your project...",
    contact_form_submit: "Send Message",
    contact_form_success_title: "Message Sent!",
    contact_form_success_text: "Thank you for reaching out. Our team will get back to you within 24 hours.",
    contact_form_send_again: "Send another message",
    contact_form_fallback_text: "If you don't hear from us, send your message directly by email:",
    contact_form_fallback_link: "Open in your email app",
    contact_form_errors_name_req: "Name is required",
    contact_form_errors_email_req: "Email is required",
    contact_form_errors_email_inv: "Please enter a valid email address",
    contact_form_errors_msg_req: "Message is required",
    contact_mail_subject: "New project inquiry from {name}",

    not_found_title: "Project not found",
    not_found_text: "The project you are looking for does not exist.",
    footer_rights: "All rights reserved.",
};

// ==================== Romanian Strings ====================

/// Romanian strings
pub const ROMANIAN_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Acasă",
    nav_stack: "Tehnologii",
    nav_experience: "Experiență",
    nav_portfolio: "Portofoliu",
    nav_faq: "Întrebări",
    nav_cta: "Începe un Proiect",

    hero_title_pre: "Construim",
    hero_title_highlight: "Viitorul Digital.",
    hero_subtitle: "RevOrgs este un studio web de top care creează experiențe digitale imersive, \
platforme robuste și interfețe definitorii pentru organizații vizionare.",
    hero_scroll: "Derulează",

    tech_kicker: "Arsenalul Nostru",
    tech_title: "Tehnologii pe care le Stăpânim",
    tech_subtitle: "Cele mai bune experiențe digitale sunt construite pe fundații solide. \
Alegem uneltele potrivite pentru fiecare proiect.",

    experience_kicker: "Procesul Nostru",
    experience_title: "Cum Lucrăm",
    experience_subtitle: "De la prima scânteie a unei idei până la produsul final, fluxul nostru \
de lucru este conceput pentru transparență, eficiență și excelență.",

    portfolio_kicker: "Proiecte Selectate",
    portfolio_title: "Piața Digitală",
    portfolio_subtitle: "Explorează colecția noastră curată de implementări de succes și produse digitale.",
    portfolio_view_live: "Vezi Site-ul Live",
    portfolio_about: "Despre Proiect",
    portfolio_technologies: "Tehnologii",
    portfolio_all: "Toate",
    portfolio_loading: "Se încarcă...",
    portfolio_back: "Înapoi la portofoliu",

    social_proof_kicker: "Parteneri de Încredere",
    social_proof_title: "Ce Spun Clienții Noștri",
    social_proof_stats_projects: "Proiecte Livrate",
    social_proof_stats_satisfaction: "Satisfacția Clienților",
    social_proof_stats_years: "Ani de Experiență",
    social_proof_stats_support: "Suport",
    social_proof_testimonials_vendi: "RevOrgs a transformat un catalog imobiliar complex într-un \
marketplace pe care clienții noștri chiar îl folosesc cu plăcere. Anunțurile au apărut mai repede decât am planificat.",
    social_proof_testimonials_chirie: "Fluxul de rezervare construit de ei este rapid pe orice telefon. \
Rezervările s-au dublat în primul sezon după lansare.",
    social_proof_testimonials_legalgrup: "O echipă precisă și profesionistă. Noul nostru site reflectă \
în sfârșit standardul serviciilor pe care le oferim clienților.",

    faq_kicker: "Întrebări",
    faq_title: "Întrebări Frecvente",
    faq_process_question: "Cum arată procesul vostru de lucru?",
    faq_process_answer: "Trecem prin descoperire, strategie, design, dezvoltare și lansare. \
Fiecare etapă se încheie cu o revizuire, astfel încât știi mereu unde se află proiectul.",
    faq_timeline_question: "Cât durează un proiect obișnuit?",
    faq_timeline_answer: "Un site de prezentare durează de obicei 4-6 săptămâni. Platformele și \
marketplace-urile durează 2-4 luni, în funcție de complexitate și integrări.",
    faq_pricing_question: "Cum stabiliți prețul unui proiect?",
    faq_pricing_answer: "Fiecare proiect primește o ofertă fixă după etapa de descoperire, împărțită \
pe etape. Nu există costuri ascunse, iar schimbările de scop sunt agreate în scris.",
    faq_support_question: "Oferiți suport după lansare?",
    faq_support_answer: "Da. Fiecare proiect include 30 de zile de suport gratuit și oferim planuri \
lunare de mentenanță pentru actualizări, monitorizare și îmbunătățiri.",
    faq_technologies_question: "Ce tehnologii folosiți?",
    faq_technologies_answer: "Lucrăm în principal cu React, Next.js, TypeScript și Node.js \
și alegem stiva care se potrivește cel mai bine fiecărui produs.",
    faq_revisions_question: "Câte revizii de design sunt incluse?",
    faq_revisions_answer: "Sunt incluse două runde de revizii la fiecare etapă de design. \
Runde suplimentare pot fi adăugate la nevoie.",

    contact_title_pre: "Hai să construim ceva",
    contact_title_highlight: "legendar.",
    contact_subtitle: "Gata să îți transformi prezența digitală? \
Acceptăm noi parteneriate pentru T4 2024.",
    contact_form_name: "Nume",
    contact_form_name_ph: "Ion Popescu",
    contact_form_email: "Email",
    contact_form_email_ph: "ion@exemplu.com",
    contact_form_message: "Mesaj",
    contact_form_message_ph: "Povestește-ne despre proiectul tău...",
    contact_form_submit: "Trimite Mesaj",
    contact_form_success_title: "Mesaj Trimis!",
    contact_form_success_text: "Mulțumim pentru mesaj. Echipa noastră îți va răspunde în termen de 24 de ore.",
    contact_form_send_again: "Trimite alt mesaj",
    contact_form_fallback_text: "Dacă nu primești un răspuns, trimite-ne mesajul direct pe email:",
    contact_form_fallback_link: "Deschide în aplicația de email",
    contact_form_errors_name_req: "Numele este obligatoriu",
    contact_form_errors_email_req: "Email-ul este obligatoriu",
    contact_form_errors_email_inv: "Te rugăm să introduci o adresă de email validă",
    contact_form_errors_msg_req: "Mesajul este obligatoriu",
    contact_mail_subject: "Cerere nouă de proiect de la {name}",

    not_found_title: "Proiectul nu a fost găsit",
    not_found_text: "Proiectul pe care îl cauți nu există.",
    footer_rights: "Toate drepturile rezervate.",
};

// ==================== Russian Strings ====================

/// Russian strings
pub const RUSSIAN_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Главная",
    nav_stack: "Стек",
    nav_experience: "Процесс",
    nav_portfolio: "Портфолио",
    nav_faq: "Вопросы",
    nav_cta: "Начать Проект",

    hero_title_pre: "Создаем",
    hero_title_highlight: "Цифровое Будущее.",
    hero_subtitle: "RevOrgs — ведущая веб-студия, создающая захватывающие цифровые решения, \
надежные платформы и интерфейсы для передовых компаний.",
    hero_scroll: "Скролл",

    tech_kicker: "Наш Арсенал",
    tech_title: "Технологии, которыми мы владеем",
    tech_subtitle: "Лучшие цифровые продукты строятся на прочном фундаменте. \
Мы выбираем правильные инструменты для каждой задачи.",

    experience_kicker: "Наш Процесс",
    experience_title: "Как Мы Работаем",
    experience_subtitle: "От первой идеи до финального запуска — наш рабочий процесс построен \
на прозрачности, эффективности и качестве.",

    portfolio_kicker: "Избранные Работы",
    portfolio_title: "Цифровые Решения",
    portfolio_subtitle: "Изучите нашу коллекцию успешных проектов и цифровых продуктов.",
    portfolio_view_live: "Открыть Сайт",
    portfolio_about: "О Проекте",
    portfolio_technologies: "Технологии",
    portfolio_all: "Все",
    portfolio_loading: "Загрузка...",
    portfolio_back: "Назад к портфолио",

    social_proof_kicker: "Нам Доверяют",
    social_proof_title: "Что Говорят Клиенты",
    social_proof_stats_projects: "Реализованных Проектов",
    social_proof_stats_satisfaction: "Довольных Клиентов",
    social_proof_stats_years: "Лет Опыта",
    social_proof_stats_support: "Поддержка",
    social_proof_testimonials_vendi: "RevOrgs превратили сложный каталог недвижимости в маркетплейс, \
которым клиентам действительно удобно пользоваться. Объявления появились быстрее, чем мы планировали.",
    social_proof_testimonials_chirie: "Система бронирования, которую они создали, быстро работает на любом телефоне. \
За первый сезон после запуска число бронирований удвоилось.",
    social_proof_testimonials_legalgrup: "Точная и профессиональная команда. Наш новый сайт наконец \
отражает уровень услуг, который мы предлагаем клиентам.",

    faq_kicker: "Вопросы",
    faq_title: "Частые Вопросы",
    faq_process_question: "Как выглядит ваш процесс работы?",
    faq_process_answer: "Мы проходим этапы исследования, стратегии, дизайна, разработки и запуска. \
Каждый этап завершается обсуждением, поэтому вы всегда знаете, на какой стадии проект.",
    faq_timeline_question: "Сколько времени занимает проект?",
    faq_timeline_answer: "Сайт-визитка обычно занимает 4–6 недель. Платформы и маркетплейсы — \
2–4 месяца в зависимости от объема и интеграций.",
    faq_pricing_question: "Как формируется стоимость?",
    faq_pricing_answer: "После этапа исследования каждый проект получает фиксированную смету, \
разбитую на этапы. Скрытых платежей нет, изменения объема согласуются письменно.",
    faq_support_question: "Вы поддерживаете проект после запуска?",
    faq_support_answer: "Да. Каждый проект включает 30 дней бесплатной поддержки, а также \
ежемесячные планы обслуживания для обновлений, мониторинга и улучшений.",
    faq_technologies_question: "Какие технологии вы используете?",
    faq_technologies_answer: "Чаще всего мы работаем с React, Next.js, TypeScript и Node.js \
и подбираем стек, который лучше всего подходит продукту.",
    faq_revisions_question: "Сколько правок дизайна включено?",
    faq_revisions_answer: "На каждом этапе дизайна включены два раунда правок. \
Дополнительные раунды можно добавить при необходимости.",

    contact_title_pre: "Давайте создадим что-то",
    contact_title_highlight: "легендарное.",
    contact_subtitle: "Готовы трансформировать ваше цифровое присутствие? \
Мы принимаем новые заявки на 4 квартал 2024 года.",
    contact_form_name: "Имя",
    contact_form_name_ph: "Иван Иванов",
    contact_form_email: "Email",
    contact_form_email_ph: "ivan@example.com",
    contact_form_message: "Сообщение",
    contact_form_message_ph: "Расскажите нам о вашем проекте...",
    contact_form_submit: "Отправить",
    contact_form_success_title: "Сообщение Отправлено!",
    contact_form_success_text: "Спасибо за обращение. Наша команда ответит вам в течение 24 часов.",
    contact_form_send_again: "Отправить еще одно",
    contact_form_fallback_text: "Если мы не ответим, отправьте сообщение напрямую по email:",
    contact_form_fallback_link: "Открыть в почтовом приложении",
    contact_form_errors_name_req: "Имя обязательно",
    contact_form_errors_email_req: "Email обязателен",
    contact_form_errors_email_inv: "Пожалуйста, введите корректный email",
    contact_form_errors_msg_req: "Сообщение обязательно",
    contact_mail_subject: "Новая заявка на проект от {name}",

    not_found_title: "Проект не найден",
    not_found_text: "Проект, который вы ищете, не существует.",
    footer_rights: "Все права защищены.",
};
