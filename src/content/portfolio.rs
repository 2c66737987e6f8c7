use crate::content::Project;
use crate::i18n::Locale;

/// Category sentinel that matches every project.
pub const ALL_CATEGORIES: &str = "All";

struct SharedProject {
    id: &'static str,
    image: &'static str,
    gallery: [&'static str; 3],
    link: &'static str,
    year: &'static str,
}

struct LocalizedProject {
    title: &'static str,
    category: &'static str,
    client: &'static str,
    description: &'static str,
    tags: [&'static str; 4],
}

const SHARED: [SharedProject; 6] = [
    SharedProject {
        id: "vendi",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=2673&auto=format&fit=crop",
        gallery: [
            "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=2673&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2653&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2670&auto=format&fit=crop",
        ],
        link: "https://vendi.md/ru/",
        year: "2024",
    },
    SharedProject {
        id: "chirie",
        image: "https://images.unsplash.com/photo-1550355291-bbee04a92027?q=80&w=2636&auto=format&fit=crop",
        gallery: [
            "https://images.unsplash.com/photo-1550355291-bbee04a92027?q=80&w=2636&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1485291571150-772bcfc10da5?q=80&w=2728&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1449965408869-eaa3f722e40d?q=80&w=2670&auto=format&fit=crop",
        ],
        link: "https://chirie-auto.md/",
        year: "2024",
    },
    SharedProject {
        id: "himalaya",
        image: "https://images.unsplash.com/photo-1615485925763-867862f80f1e?q=80&w=2666&auto=format&fit=crop",
        gallery: [
            "https://images.unsplash.com/photo-1615485925763-867862f80f1e?q=80&w=2666&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1544367563-12123d8965cd?q=80&w=2670&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1603189999818-6f68532f1704?q=80&w=2670&auto=format&fit=crop",
        ],
        link: "https://himalayasalt.md/",
        year: "2023",
    },
    SharedProject {
        id: "legalgrup",
        image: "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=2669&auto=format&fit=crop",
        gallery: [
            "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=2669&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1507679799987-c73779587ccf?q=80&w=2671&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?q=80&w=2632&auto=format&fit=crop",
        ],
        link: "https://legalgrup.md/ru",
        year: "2023",
    },
    SharedProject {
        id: "servicii",
        image: "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?q=80&w=2600&auto=format&fit=crop",
        gallery: [
            "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?q=80&w=2600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1505664194779-8beaceb93744?q=80&w=2670&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1453928582365-b6ad33cbcf64?q=80&w=2673&auto=format&fit=crop",
        ],
        link: "https://serviciijuridice.md/",
        year: "2023",
    },
    SharedProject {
        id: "vptrokenbau",
        image: "https://images.unsplash.com/photo-1541888946428-d63bb8f49f44?q=80&w=2670&auto=format&fit=crop",
        gallery: [
            "https://images.unsplash.com/photo-1541888946428-d63bb8f49f44?q=80&w=2670&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2670&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=2669&auto=format&fit=crop",
        ],
        link: "https://vptrokenbau.netlify.app/",
        year: "2024",
    },
];

const EN: [LocalizedProject; 6] = [
    LocalizedProject {
        title: "Vendi Imobiliare",
        category: "Real Estate",
        client: "Vendi",
        description: "A comprehensive real estate marketplace simplifying the property buying and renting process.",
        tags: ["Marketplace", "Next.js", "Maps", "Real Estate"],
    },
    LocalizedProject {
        title: "Chirie Auto",
        category: "Automotive",
        client: "Chirie Auto MD",
        description: "A dynamic car rental platform designed for speed and ease of use. Users can browse a diverse fleet and book instantly.",
        tags: ["Rental System", "React", "Booking", "Mobile First"],
    },
    LocalizedProject {
        title: "Himalaya Salt",
        category: "E-Commerce",
        client: "Himalaya Salt MD",
        description: "An elegant e-commerce boutique dedicated to premium Himalayan salt products, emphasizing purity and wellness.",
        tags: ["E-Commerce", "Wellness", "Brand", "Shopify"],
    },
    LocalizedProject {
        title: "LegalGrup",
        category: "Corporate",
        client: "LegalGrup SRL",
        description: "A sophisticated corporate presence for a premier legal firm, establishing authority and trust through detailed service breakdowns.",
        tags: ["Corporate", "Legal Tech", "Multilingual", "UI/UX"],
    },
    LocalizedProject {
        title: "Servicii Juridice",
        category: "Legal Services",
        client: "Servicii Juridice",
        description: "A user-centric legal portal designed for rapid information retrieval and accessibility.",
        tags: ["SEO", "Performance", "Consulting", "React"],
    },
    LocalizedProject {
        title: "VP Trokenbau",
        category: "Construction",
        client: "VP Trokenbau",
        description: "A professional construction company website showcasing services, projects, and expertise in the construction industry.",
        tags: ["Construction", "Corporate", "React", "Modern Design"],
    },
];

const ROM: [LocalizedProject; 6] = [
    LocalizedProject {
        title: "Vendi Imobiliare",
        category: "Imobiliare",
        client: "Vendi",
        description: "Un marketplace imobiliar complet care simplifică procesul de cumpărare și închiriere a proprietăților.",
        tags: ["Marketplace", "Next.js", "Hărți", "Imobiliare"],
    },
    LocalizedProject {
        title: "Chirie Auto",
        category: "Auto",
        client: "Chirie Auto MD",
        description: "O platformă dinamică de închirieri auto. Utilizatorii pot naviga printr-o flotă diversă și pot rezerva instantaneu.",
        tags: ["Sistem Rezervări", "React", "Booking", "Mobile First"],
    },
    LocalizedProject {
        title: "Himalaya Salt",
        category: "E-Commerce",
        client: "Himalaya Salt MD",
        description: "Un boutique e-commerce elegant dedicat produselor din sare de Himalaya, punând accent pe puritate și wellness.",
        tags: ["E-Commerce", "Wellness", "Brand", "Shopify"],
    },
    LocalizedProject {
        title: "LegalGrup",
        category: "Corporativ",
        client: "LegalGrup SRL",
        description: "O prezență corporativă sofisticată pentru o firmă de avocatură de top, stabilind autoritate și încredere.",
        tags: ["Corporativ", "Legal Tech", "Multilingv", "UI/UX"],
    },
    LocalizedProject {
        title: "Servicii Juridice",
        category: "Servicii Juridice",
        client: "Servicii Juridice",
        description: "Un portal juridic centrat pe utilizator, conceput pentru recuperarea rapidă a informațiilor.",
        tags: ["SEO", "Performanță", "Consulting", "React"],
    },
    LocalizedProject {
        title: "VP Trokenbau",
        category: "Construcții",
        client: "VP Trokenbau",
        description: "Un site web profesional pentru o companie de construcții, prezentând servicii, proiecte și expertiză în industria construcțiilor.",
        tags: ["Construcții", "Corporativ", "React", "Design Modern"],
    },
];

const RU: [LocalizedProject; 6] = [
    LocalizedProject {
        title: "Vendi Imobiliare",
        category: "Недвижимость",
        client: "Vendi",
        description: "Комплексный маркетплейс недвижимости, упрощающий процесс покупки и аренды жилья.",
        tags: ["Маркетплейс", "Next.js", "Карты", "Недвижимость"],
    },
    LocalizedProject {
        title: "Chirie Auto",
        category: "Авто",
        client: "Chirie Auto MD",
        description: "Динамичная платформа по аренде автомобилей. Пользователи могут просматривать автопарк и бронировать мгновенно.",
        tags: ["Бронирование", "React", "Авто", "Mobile First"],
    },
    LocalizedProject {
        title: "Himalaya Salt",
        category: "E-Commerce",
        client: "Himalaya Salt MD",
        description: "Элегантный интернет-магазин премиальных продуктов из гималайской соли.",
        tags: ["E-Commerce", "Wellness", "Бренд", "Shopify"],
    },
    LocalizedProject {
        title: "LegalGrup",
        category: "Корпоративный",
        client: "LegalGrup SRL",
        description: "Корпоративный сайт для ведущей юридической фирмы, укрепляющий авторитет и доверие.",
        tags: ["Корпоративный", "Legal Tech", "Multilingual", "UI/UX"],
    },
    LocalizedProject {
        title: "Servicii Juridice",
        category: "Юр. Услуги",
        client: "Servicii Juridice",
        description: "Юридический портал, ориентированный на пользователя, для быстрого поиска информации.",
        tags: ["SEO", "Performance", "Консалтинг", "React"],
    },
    LocalizedProject {
        title: "VP Trokenbau",
        category: "Строительство",
        client: "VP Trokenbau",
        description: "Профессиональный сайт строительной компании, демонстрирующий услуги, проекты и экспертизу в строительной отрасли.",
        tags: ["Строительство", "Корпоративный", "React", "Современный Дизайн"],
    },
];

/// Portfolio projects for a locale, shared and localized fields joined by position.
pub fn portfolio(locale: Locale) -> Vec<Project> {
    let localized = match locale {
        Locale::En => &EN,
        Locale::Rom => &ROM,
        Locale::Ru => &RU,
    };

    SHARED
        .iter()
        .zip(localized.iter())
        .map(|(shared, local)| Project {
            id: shared.id,
            title: local.title,
            category: local.category,
            client: local.client,
            description: local.description,
            image: shared.image,
            gallery: Some(shared.gallery.to_vec()),
            link: Some(shared.link),
            year: shared.year,
            tags: Some(local.tags.to_vec()),
        })
        .collect()
}

/// Look up a project by id in a locale.
pub fn find_project(locale: Locale, id: &str) -> Option<Project> {
    portfolio(locale).into_iter().find(|p| p.id == id)
}

/// The `All` sentinel followed by distinct categories in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut result = vec![ALL_CATEGORIES];
    for project in projects {
        if !result.contains(&project.category) {
            result.push(project.category);
        }
    }
    result
}

/// Projects in `category`; every project for the `All` sentinel.
pub fn filter_by_category(projects: &[Project], category: &str) -> Vec<Project> {
    if category == ALL_CATEGORIES {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_same_project_ids() {
        let ids = |locale| portfolio(locale).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(Locale::En), ids(Locale::Rom));
        assert_eq!(ids(Locale::En), ids(Locale::Ru));
        assert_eq!(ids(Locale::En).len(), 6);
    }

    #[test]
    fn test_localized_fields_follow_locale() {
        let chirie = find_project(Locale::Ru, "chirie").unwrap();
        assert_eq!(chirie.category, "Авто");
        assert_eq!(chirie.link, Some("https://chirie-auto.md/"));
    }

    #[test]
    fn test_find_project_unknown() {
        assert!(find_project(Locale::En, "nope").is_none());
    }

    #[test]
    fn test_categories_start_with_all_and_are_distinct() {
        let projects = portfolio(Locale::En);
        let cats = categories(&projects);
        assert_eq!(cats[0], ALL_CATEGORIES);
        assert_eq!(cats[1], "Real Estate");
        assert_eq!(cats.len(), 7);
    }

    #[test]
    fn test_categories_dedupe() {
        let mut projects = portfolio(Locale::En);
        projects.push(projects[0].clone());
        assert_eq!(categories(&projects).len(), 7);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let projects = portfolio(Locale::Rom);
        assert_eq!(filter_by_category(&projects, ALL_CATEGORIES), projects);
    }

    #[test]
    fn test_filter_by_category() {
        let projects = portfolio(Locale::En);
        let corporate = filter_by_category(&projects, "Corporate");
        assert_eq!(corporate.len(), 1);
        assert_eq!(corporate[0].id, "legalgrup");

        assert!(filter_by_category(&projects, "Gaming").is_empty());
    }
}
