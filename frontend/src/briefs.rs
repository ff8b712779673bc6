use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    TextArea,
    Choice,
    Phone,
    Email,
}

impl QuestionKind {
    /// The `type` attribute used when the question renders as an `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            QuestionKind::Phone => "tel",
            QuestionKind::Email => "email",
            _ => "text",
        }
    }

    /// Enter submits the step everywhere except in multi-line answers.
    pub fn enter_advances(self) -> bool {
        self != QuestionKind::TextArea
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub choices: &'static [&'static str],
    pub placeholder: Option<&'static str>,
    pub required: bool,
}

impl Question {
    const fn new(id: &'static str, text: &'static str, kind: QuestionKind) -> Self {
        Question {
            id,
            text,
            kind,
            choices: &[],
            placeholder: None,
            required: true,
        }
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BriefConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: Vec<Question>,
}

impl BriefConfig {
    /// Wraps the category questions in the opening and closing questions
    /// every brief shares.
    fn framed(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        questions: &[Question],
    ) -> Self {
        let questions = OPENING_QUESTIONS
            .iter()
            .chain(questions)
            .chain(CLOSING_QUESTIONS)
            .cloned()
            .collect();
        BriefConfig { id, title, description, questions }
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

const OPENING_QUESTIONS: &[Question] = &[
    Question::new("name", "What is your full name?", QuestionKind::Text).placeholder("John Doe"),
    Question::new("email", "What is your email address?", QuestionKind::Email)
        .placeholder("john@example.com"),
];

const CLOSING_QUESTIONS: &[Question] = &[
    Question::new(
        "budget",
        "What is your estimated budget for this project?",
        QuestionKind::Choice,
    )
    .choices(&["< $1k", "$1k - $5k", "$5k - $10k", "$10k+"]),
    Question::new("timeline", "What is your expected timeline?", QuestionKind::Choice)
        .choices(&["ASAP", "1-2 Months", "3-6 Months", "Flexible"]),
    Question::new(
        "phone",
        "Finally, please provide your phone number so we can reach you directly.",
        QuestionKind::Phone,
    )
    .placeholder("+1 (555) 000-0000"),
];

/// Order in which briefs are listed; the map below is keyed by these ids.
pub const BRIEF_IDS: &[&str] = &["branding", "social-media", "ui-ux", "packaging", "graphic-design"];

pub static BRIEFS: Lazy<HashMap<&'static str, BriefConfig>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert("branding", BriefConfig::framed(
        "branding",
        "Brand Identity & Logo",
        "Let's define the soul of your business.",
        &[
            Question::new("brand_name", "What is the exact brand name?", QuestionKind::Text)
                .placeholder("Brand Name"),
            Question::new("brand_values", "What are your core brand values?", QuestionKind::TextArea)
                .placeholder("Trust, Innovation, Sustainability..."),
            Question::new("style_preference", "Which style best describes your vision?", QuestionKind::Choice)
                .choices(&["Minimal & Modern", "Classic & Luxury", "Playful & Colorful", "Tech & Futuristic"]),
            Question::new("deliverables", "What items do you need?", QuestionKind::TextArea)
                .placeholder("Logo, Business Cards, Letterhead, Brand Guidelines..."),
        ],
    ));

    map.insert("social-media", BriefConfig::framed(
        "social-media",
        "Social Media Strategy",
        "Elevate your digital presence and engagement.",
        &[
            Question::new("platforms", "Which platforms are we focusing on?", QuestionKind::Choice)
                .choices(&["Instagram & TikTok", "LinkedIn & Twitter", "YouTube", "All of the above"]),
            Question::new("goal", "What is the primary goal?", QuestionKind::Choice)
                .choices(&["Brand Awareness", "Lead Generation", "Community Building", "Sales"]),
            Question::new("content_type", "What type of content do you need?", QuestionKind::TextArea)
                .placeholder("Reels, Carousel posts, Stories, Banners..."),
        ],
    ));

    map.insert("ui-ux", BriefConfig::framed(
        "ui-ux",
        "UI/UX Design",
        "Help us understand your product and user needs.",
        &[
            Question::new("product_type", "What type of product are we designing?", QuestionKind::Choice)
                .choices(&["Mobile App", "Web Application", "Website", "Dashboard", "Other"]),
            Question::new("target_audience", "Who is your target audience?", QuestionKind::TextArea)
                .placeholder("Describe age, profession, habits..."),
            Question::new("competitors", "List 2-3 main competitors or inspirations.", QuestionKind::TextArea)
                .placeholder("Links to websites or app names...")
                .optional(),
            Question::new("features", "What are the core features of the product?", QuestionKind::TextArea)
                .placeholder("User login, payment gateway, search, etc..."),
        ],
    ));

    map.insert("packaging", BriefConfig::framed(
        "packaging",
        "Packaging Design",
        "Creating the physical experience for your product.",
        &[
            Question::new("product_desc", "What is the product inside the package?", QuestionKind::TextArea),
            Question::new("material", "Do you have a preferred packaging material?", QuestionKind::Choice)
                .choices(&["Cardboard Box", "Pouch/Bag", "Glass Bottle", "Sustainable/Eco", "Not sure yet"]),
            Question::new("print_specs", "Are there specific print constraints or die-lines?", QuestionKind::Text)
                .placeholder("e.g., 4-color process, foil stamping...")
                .optional(),
        ],
    ));

    map.insert("graphic-design", BriefConfig::framed(
        "graphic-design",
        "General Graphic Design",
        "Tell us about your visual communication needs.",
        &[
            Question::new("project_type", "What are you looking to create?", QuestionKind::Choice)
                .choices(&["Marketing Materials", "Presentation Deck", "Infographics", "Other"]),
            Question::new("content", "Do you already have the text/copy ready?", QuestionKind::Choice)
                .choices(&["Yes, it's ready", "No, I need help with copy", "Partial draft"]),
        ],
    ));

    map
});

pub fn get_brief(id: &str) -> Option<&'static BriefConfig> {
    BRIEFS.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_listed_brief_exists() {
        for id in BRIEF_IDS {
            let brief = get_brief(id).unwrap();
            assert_eq!(brief.id, *id);
        }
        assert_eq!(BRIEFS.len(), BRIEF_IDS.len());
        assert!(get_brief("web-3").is_none());
    }

    #[test]
    fn question_ids_are_unique_within_a_brief() {
        for brief in BRIEFS.values() {
            let ids: HashSet<_> = brief.questions.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), brief.questions.len(), "duplicate id in {}", brief.id);
        }
    }

    #[test]
    fn briefs_open_with_contact_and_close_with_budget() {
        for brief in BRIEFS.values() {
            let ids: Vec<_> = brief.questions.iter().map(|q| q.id).collect();
            assert_eq!(&ids[..2], &["name", "email"]);
            assert_eq!(&ids[ids.len() - 3..], &["budget", "timeline", "phone"]);
        }
    }

    #[test]
    fn choice_questions_carry_choices() {
        for brief in BRIEFS.values() {
            for q in &brief.questions {
                assert_eq!(q.kind == QuestionKind::Choice, !q.choices.is_empty(), "{}", q.id);
            }
        }
    }

    #[test]
    fn optional_questions() {
        let ui = get_brief("ui-ux").unwrap();
        assert!(!ui.question("competitors").unwrap().required);
        assert!(ui.question("features").unwrap().required);
        assert!(!get_brief("packaging").unwrap().question("print_specs").unwrap().required);
    }

    #[test]
    fn textareas_do_not_advance_on_enter() {
        assert!(!QuestionKind::TextArea.enter_advances());
        assert!(QuestionKind::Email.enter_advances());
        assert_eq!(QuestionKind::Phone.input_type(), "tel");
    }
}
