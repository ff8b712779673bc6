use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Fa,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Fa)
    }
}

/// Languages with no table of their own resolve to this one.
pub const FALLBACK_LANGUAGE: Language = Language::En;

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    /// First line is set thin, the rest bold.
    pub title: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub gallery: &'static [&'static str],
    pub description: &'static str,
    pub full_description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

impl Project {
    pub fn title_lines(&self) -> impl Iterator<Item = &'static str> {
        self.title.split('\n')
    }

    pub fn flat_title(&self) -> String {
        self.title.replace('\n', " ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub number: u32,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Client {
    pub name: &'static str,
    pub monogram: &'static str,
}

/// A service card on the home page. `brief_id` selects the brief it opens.
#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub brief_id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavCopy {
    pub home: &'static str,
    pub about: &'static str,
    pub portfolio: &'static str,
    pub process: &'static str,
    pub contact: &'static str,
    pub lets_talk: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroCopy {
    pub featured: &'static str,
    pub view_case: &'static str,
    pub client: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AboutCopy {
    pub label: &'static str,
    pub headline: &'static str,
    pub highlight: &'static str,
    pub headline_suffix: &'static str,
    pub manifesto: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionCopy {
    pub label: &'static str,
    pub title: &'static str,
    pub title_suffix: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactCopy {
    pub title: &'static str,
    pub title_suffix: &'static str,
    pub desc: &'static str,
    pub email: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub project_placeholder: &'static str,
    pub msg_placeholder: &'static str,
    pub send: &'static str,
    pub thanks_title: &'static str,
    pub thanks_body: &'static str,
    pub copyright: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub options: &'static [&'static str],
}

/// Everything the site renders for one language.
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub services: &'static [Service],
    pub portfolio: SectionCopy,
    pub view_all: &'static str,
    pub projects_intro: &'static str,
    pub process: SectionCopy,
    pub steps: &'static [ProcessStep],
    pub testimonials: SectionCopy,
    pub testimonials_desc: &'static str,
    pub testimonial_items: &'static [Testimonial],
    pub clients_label: &'static str,
    pub clients: &'static [Client],
    pub contact: ContactCopy,
    pub projects: &'static [Project],
}

impl Content {
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects before and after `id`, wrapping around the list.
    pub fn neighbours(&self, id: u32) -> Option<(&Project, &Project)> {
        let len = self.projects.len();
        let index = self.projects.iter().position(|p| p.id == id)?;
        let prev = &self.projects[(index + len - 1) % len];
        let next = &self.projects[(index + 1) % len];
        Some((prev, next))
    }

    pub fn similar_projects(&self, project: &Project, limit: usize) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == project.category && p.id != project.id)
            .take(limit)
            .collect()
    }

    /// The hero slider cycles through the first four projects.
    pub fn featured_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(4)]
    }
}

const ENGLISH_PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Royal\nAcademy",
        client: "Royal Academy",
        category: "Education",
        image: "https://s6.uupload.ir/files/12_439u.jpg",
        gallery: &["https://s6.uupload.ir/files/12_439u.jpg"],
        description: "A prestigious platform for art and design education.",
        full_description: "We designed the digital experience for Royal Academy, focusing on accessibility to art history and modern design courses. The interface prioritizes clarity and artistic inspiration.",
        tags: &["Web Design", "Education", "Art"],
        link: Some("https://www.royalacademy.org.uk/"),
    },
    Project {
        id: 2,
        title: "Medup\nBusiness Coach",
        client: "Medup",
        category: "Consulting",
        image: "https://s6.uupload.ir/files/6_k1mh.jpg",
        gallery: &[
            "https://s6.uupload.ir/files/6_k1mh.jpg",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?q=80&w=1600&auto=format&fit=crop",
        ],
        description: "Personal branding and coaching platform.",
        full_description: "Medup required a professional yet approachable brand identity. We created a clean, trust-building visual language that highlights the coach's expertise and success stories.",
        tags: &["Branding", "Web Design", "Identity"],
        link: Some("https://medup.ir/"),
    },
    Project {
        id: 3,
        title: "VARA\nArchitecte Group",
        client: "VARA Group",
        category: "Architecture",
        image: "https://s6.uupload.ir/files/8_upy5.jpg",
        gallery: &[
            "https://s6.uupload.ir/files/8_upy5.jpg",
            "https://images.unsplash.com/photo-1600607686527-6fb886090705?q=80&w=1600&auto=format&fit=crop",
        ],
        description: "Minimalist portfolio for architectural excellence.",
        full_description: "VARA Architecte Group needed a site that served as a digital gallery for their structures. We utilized negative space and sophisticated typography to let the work speak for itself.",
        tags: &["Web Design", "Architecture", "Minimal"],
        link: Some("https://www.vara-architects.com/"),
    },
    Project {
        id: 4,
        title: "Skoda\nAuto Iran",
        client: "Skoda",
        category: "Automotive",
        image: "https://s6.uupload.ir/files/11_uek.jpg",
        gallery: &[
            "https://s6.uupload.ir/files/11_uek.jpg",
            "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?q=80&w=1600&auto=format&fit=crop",
        ],
        description: "Official digital presence for Skoda's market entry.",
        full_description: "A comprehensive digital strategy and website design for Skoda Auto Iran, focusing on model showcasing, specifications, and dealership location services.",
        tags: &["Web Design", "Corporate", "Automotive"],
        link: Some("https://skodair.com/"),
    },
    Project {
        id: 5,
        title: "Karan\nDeniz Aria",
        client: "Karan Deniz Aria",
        category: "Corporate",
        image: "https://s6.uupload.ir/files/3_4fw6.jpg",
        gallery: &[
            "https://s6.uupload.ir/files/3_4fw6.jpg",
            "https://images.unsplash.com/photo-1486406141726-eda3203fe5a9?q=80&w=1600&auto=format&fit=crop",
        ],
        description: "Corporate identity and website development.",
        full_description: "We established a strong corporate identity for Karan Deniz Aria, reflecting their professionalism and industry standing through a cohesive design system.",
        tags: &["Branding", "Corporate", "Web Design"],
        link: Some("https://karandeniz.com/"),
    },
    Project {
        id: 6,
        title: "Fiore\nKitchen System",
        client: "Fiore",
        category: "Interior Design",
        image: "https://s6.uupload.ir/files/2_flpr.jpg",
        gallery: &[
            "https://s6.uupload.ir/files/2_flpr.jpg",
            "https://images.unsplash.com/photo-1556911220-bff31c812dba?q=80&w=1600&auto=format&fit=crop",
        ],
        description: "Modern catalog for premium kitchen systems.",
        full_description: "Fiore's project involved creating a digital catalog that highlights the textures, materials, and functionality of their modern kitchen systems.",
        tags: &["Web Design", "Interior", "Catalog"],
        link: Some("https://fiorekitchen.com/"),
    },
];

static ENGLISH: Content = Content {
    nav: NavCopy {
        home: "Home",
        about: "About",
        portfolio: "Portfolio",
        process: "Process",
        contact: "Contact",
        lets_talk: "Let's Talk",
    },
    hero: HeroCopy {
        featured: "Featured Work",
        view_case: "View Case Study",
        client: "Client",
    },
    about: AboutCopy {
        label: "Who We Are",
        headline: "Bridging the gap between ",
        highlight: "vision",
        headline_suffix: " and reality.",
        manifesto: "Aku Design Studio is not just an agency; it's a creative collective. We believe that great design is the silence between the notes, the white space on the canvas, and the intuitive flow of a digital interface.",
    },
    services: &[
        Service { brief_id: "branding", title: "Logo & Visual Identity", icon: "✒" },
        Service { brief_id: "social-media", title: "Social Media", icon: "📱" },
        Service { brief_id: "ui-ux", title: "UI / UX Design", icon: "▦" },
        Service { brief_id: "packaging", title: "Packaging Design", icon: "📦" },
    ],
    portfolio: SectionCopy {
        label: "Selected Works",
        title: "Our Latest",
        title_suffix: "Masterpieces.",
    },
    view_all: "View All Projects",
    projects_intro: "A curated selection of our finest projects, showcasing our passion for design, branding, and digital innovation.",
    process: SectionCopy {
        label: "How We Work",
        title: "From Idea to",
        title_suffix: "Execution",
    },
    steps: &[
        ProcessStep { number: 1, title: "Discovery", desc: "Consultation to understand your goals." },
        ProcessStep { number: 2, title: "Research", desc: "Competitor analysis and moodboarding." },
        ProcessStep { number: 3, title: "Design", desc: "Execution and refinement based on feedback." },
        ProcessStep { number: 4, title: "Delivery", desc: "Final assets handover and support." },
    ],
    testimonials: SectionCopy {
        label: "Testimonials",
        title: "Voices of",
        title_suffix: "Satisfaction.",
    },
    testimonials_desc: "Don't just take our word for it. Here is what our partners have to say about the collaboration.",
    testimonial_items: &[
        Testimonial { id: 1, name: "Ali Rezaei", role: "CEO at Techno", text: "Working with Aku was fantastic. They delivered exactly what we had in mind, with quality exceeding our expectations." },
        Testimonial { id: 2, name: "Sara Ahmadi", role: "Marketing Director", text: "The branding they created for our cafe completely transformed our business image. Highly recommended!" },
        Testimonial { id: 3, name: "James Wilson", role: "Product Lead", text: "From concept to final delivery, the process was smooth and the results were world-class. A truly creative partner." },
        Testimonial { id: 4, name: "Emily Carter", role: "Founder at Bloom", text: "The attention to detail in the UI design was impeccable. Our user engagement increased by 40% after the launch." },
        Testimonial { id: 5, name: "Mohammad Karimi", role: "CTO at NextGen", text: "Professional, timely, and incredibly creative. Aku Design Studio is now our go-to agency for all digital products." },
    ],
    clients_label: "Trusted by Innovative Companies",
    clients: &[
        Client { name: "Google", monogram: "G" },
        Client { name: "Spotify", monogram: "S" },
        Client { name: "Airbnb", monogram: "A" },
        Client { name: "Nike", monogram: "N" },
        Client { name: "Apple", monogram: "A" },
        Client { name: "Uber", monogram: "U" },
        Client { name: "Netflix", monogram: "N" },
        Client { name: "Tesla", monogram: "T" },
    ],
    contact: ContactCopy {
        title: "Let's work",
        title_suffix: "together.",
        desc: "Ready to transform your digital presence? We are here to help you realize your vision.",
        email: "hello@akustudio.com",
        name_placeholder: "Your Name",
        email_placeholder: "Email Address",
        project_placeholder: "Select Project Type",
        msg_placeholder: "Tell us about your project...",
        send: "Send Message",
        thanks_title: "Message Sent!",
        thanks_body: "Thanks for reaching out. We'll get back to you within 24 hours.",
        copyright: "© 2024 Aku Design Studio. Crafted with passion.",
        privacy: "Privacy",
        terms: "Terms",
        options: &["Web Design", "Branding", "Development"],
    },
    projects: ENGLISH_PROJECTS,
};

/// Registered content per language. A language missing here (Farsi, until
/// translations land) reads the fallback language's table.
static CONTENT: Lazy<HashMap<Language, &'static Content>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(Language::En, &ENGLISH);
    map
});

pub fn content_for(language: Language) -> &'static Content {
    CONTENT
        .get(&language)
        .or_else(|| CONTENT.get(&FALLBACK_LANGUAGE))
        .copied()
        .unwrap_or(&ENGLISH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn farsi_falls_back_to_english() {
        assert_eq!(content_for(Language::Fa), content_for(Language::En));
        assert!(Language::Fa.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn project_ids_are_unique() {
        let content = content_for(Language::En);
        let ids: HashSet<u32> = content.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), content.projects.len());
    }

    #[test]
    fn every_service_opens_a_known_brief() {
        let services = content_for(Language::En).services;
        assert!(!services.is_empty());
        for service in services {
            assert!(
                crate::briefs::get_brief(service.brief_id).is_some(),
                "service {} points at missing brief {}",
                service.title,
                service.brief_id
            );
        }
    }

    #[test]
    fn neighbours_wrap_around() {
        let content = content_for(Language::En);
        let (prev, next) = content.neighbours(1).unwrap();
        assert_eq!(prev.id, 6);
        assert_eq!(next.id, 2);

        let (prev, next) = content.neighbours(6).unwrap();
        assert_eq!(prev.id, 5);
        assert_eq!(next.id, 1);

        assert!(content.neighbours(42).is_none());
    }

    #[test]
    fn similar_projects_share_category_and_skip_self() {
        let content = content_for(Language::En);
        for project in content.projects {
            for other in content.similar_projects(project, 2) {
                assert_eq!(other.category, project.category);
                assert_ne!(other.id, project.id);
            }
        }
    }

    #[test]
    fn titles_split_into_thin_and_bold_lines() {
        let project = content_for(Language::En).project(2).unwrap();
        let lines: Vec<_> = project.title_lines().collect();
        assert_eq!(lines, vec!["Medup", "Business Coach"]);
        assert_eq!(project.flat_title(), "Medup Business Coach");
    }

    #[test]
    fn hero_features_first_four_projects() {
        let featured = content_for(Language::En).featured_projects();
        assert_eq!(featured.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
