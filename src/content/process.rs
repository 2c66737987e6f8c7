use crate::content::ProcessStep;
use crate::i18n::Locale;

const IDS: [&str; 5] = ["01", "02", "03", "04", "05"];

const EN: [(&str, &str); 5] = [
    ("Discovery & Research", "We immerse ourselves in your brand ecosystem. Through stakeholder interviews and market analysis, we uncover the core challenges and define clear KPIs for success."),
    ("Strategy & Architecture", "We blueprint the solution. This involves creating detailed sitemaps, user flows, and selecting the optimal tech stack to ensure scalability, security, and future-proofing."),
    ("Design & Prototyping", "We craft high-fidelity designs and interactive prototypes. Our focus is on intuitive UX and brand-defining UI that creates an emotional connection with users."),
    ("Development", "Our engineers bring the vision to life using clean, semantic code. We implement complex animations and backend logic while maintaining high performance scores."),
    ("Launch & Evolution", "We manage the deployment process and monitor real-world performance. Post-launch, we iterate based on user data to continuously optimize the experience."),
];

const ROM: [(&str, &str); 5] = [
    ("Descoperire & Cercetare", "Ne imersăm în ecosistemul brandului tău. Prin interviuri și analize de piață, descoperim provocările principale și definim KPI-uri clare pentru succes."),
    ("Strategie & Arhitectură", "Planificăm soluția. Creăm hărți detaliate ale site-ului, fluxuri de utilizatori și selectăm stiva tehnologică optimă pentru scalabilitate și securitate."),
    ("Design & Prototipare", "Creăm design-uri high-fidelity și prototipuri interactive. Ne concentrăm pe UX intuitiv și UI care definește brandul și creează o conexiune emoțională."),
    ("Dezvoltare", "Inginerii noștri dau viață viziunii folosind cod curat și semantic. Implementăm animații complexe și logică backend, menținând performanța ridicată."),
    ("Lansare & Evoluție", "Gestionăm procesul de implementare și monitorizăm performanța. Post-lansare, optimizăm experiența pe baza datelor reale."),
];

const RU: [(&str, &str); 5] = [
    ("Исследование", "Мы погружаемся в экосистему вашего бренда. Через интервью и анализ рынка мы выявляем ключевые задачи и определяем KPI для успеха."),
    ("Стратегия и Архитектура", "Мы проектируем решение. Это включает создание подробных карт сайта, пользовательских сценариев и выбор оптимального стека технологий."),
    ("Дизайн и Прототипирование", "Мы создаем детализированные макеты и интерактивные прототипы. Наш фокус — интуитивный UX и UI, который формирует эмоциональную связь."),
    ("Разработка", "Наши инженеры воплощают видение в жизнь с помощью чистого кода. Мы реализуем сложные анимации и логику бэкенда, сохраняя высокую производительность."),
    ("Запуск и Развитие", "Мы управляем процессом развертывания и мониторинга. После запуска мы оптимизируем продукт на основе реальных пользовательских данных."),
];

/// The five-step process timeline for a locale.
pub fn process(locale: Locale) -> Vec<ProcessStep> {
    let steps = match locale {
        Locale::En => &EN,
        Locale::Rom => &ROM,
        Locale::Ru => &RU,
    };

    IDS.iter()
        .zip(steps.iter())
        .map(|(id, (title, description))| ProcessStep {
            id: *id,
            title: *title,
            description: *description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_has_five_ordered_steps() {
        for locale in Locale::ALL {
            let steps = process(locale);
            assert_eq!(steps.len(), 5);
            assert_eq!(steps[0].id, "01");
            assert_eq!(steps[4].id, "05");
        }
    }

    #[test]
    fn test_process_is_localized() {
        assert_eq!(process(Locale::En)[3].title, "Development");
        assert_eq!(process(Locale::Rom)[3].title, "Dezvoltare");
        assert_eq!(process(Locale::Ru)[3].title, "Разработка");
    }
}
