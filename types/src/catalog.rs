//! Static content: the seven rest types, their statements, and recommendations.
//!
//! Both editions read from the same table. The quick edition asks the first
//! three statements of every bank; recommendations are shared.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::Rating;

pub const CATEGORY_COUNT: usize = 7;

const STATEMENTS_PER_CATEGORY: usize = 5;

/// Stable identifier for a rest type. Declaration order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    Mental,
    Physical,
    Emotional,
    Social,
    Spiritual,
    Sensory,
    Intellectual,
}

impl CategoryId {
    pub const ALL: [CategoryId; CATEGORY_COUNT] = [
        CategoryId::Mental,
        CategoryId::Physical,
        CategoryId::Emotional,
        CategoryId::Social,
        CategoryId::Spiritual,
        CategoryId::Sensory,
        CategoryId::Intellectual,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryId::Mental => "mental",
            CategoryId::Physical => "physical",
            CategoryId::Emotional => "emotional",
            CategoryId::Social => "social",
            CategoryId::Spiritual => "spiritual",
            CategoryId::Sensory => "sensory",
            CategoryId::Intellectual => "intellectual",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CategoryId::Mental => "Mental Rest",
            CategoryId::Physical => "Physical Rest",
            CategoryId::Emotional => "Emotional Rest",
            CategoryId::Social => "Social Rest",
            CategoryId::Spiritual => "Spiritual Rest",
            CategoryId::Sensory => "Sensory Rest",
            CategoryId::Intellectual => "Intellectual Rest",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            CategoryId::Mental => "🧠",
            CategoryId::Physical => "💪",
            CategoryId::Emotional => "💝",
            CategoryId::Social => "👥",
            CategoryId::Spiritual => "✨",
            CategoryId::Sensory => "🌿",
            CategoryId::Intellectual => "🎯",
        }
    }

    /// Position in catalog order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which question bank size to present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// Five statements per rest type.
    #[default]
    Standard,
    /// Three statements per rest type.
    Quick,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown edition `{0}` (expected `standard` or `quick`)")]
pub struct UnknownEdition(pub String);

impl Edition {
    #[must_use]
    pub const fn questions_per_category(self) -> usize {
        match self {
            Edition::Standard => STATEMENTS_PER_CATEGORY,
            Edition::Quick => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Edition::Standard => "standard",
            Edition::Quick => "quick",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Edition::Standard => Edition::Quick,
            Edition::Quick => Edition::Standard,
        }
    }
}

impl FromStr for Edition {
    type Err = UnknownEdition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "full" | "5" => Ok(Edition::Standard),
            "quick" | "short" | "3" => Ok(Edition::Quick),
            _ => Err(UnknownEdition(s.to_string())),
        }
    }
}

/// One rest type as presented by a particular edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    questions: &'static [&'static str],
    recommendations: &'static [&'static str],
}

impl Category {
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.id.label()
    }

    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        self.id.emoji()
    }

    #[must_use]
    pub const fn questions(&self) -> &'static [&'static str] {
        self.questions
    }

    #[must_use]
    pub const fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub const fn recommendations(&self) -> &'static [&'static str] {
        self.recommendations
    }

    /// Highest reachable total: every statement rated "Very true".
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.question_count() as u32 * u32::from(Rating::MAX)
    }

    /// Lowest total of a complete entry: every statement rated "Not true".
    #[must_use]
    pub fn min_score(&self) -> u32 {
        self.question_count() as u32 * u32::from(Rating::MIN)
    }
}

/// The ordered set of categories for one edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    edition: Edition,
    categories: [Category; CATEGORY_COUNT],
}

impl Catalog {
    #[must_use]
    pub fn new(edition: Edition) -> Self {
        let asked = edition.questions_per_category();
        let categories = CategoryId::ALL.map(|id| {
            let content = &CONTENT[id.index()];
            Category {
                id,
                questions: &content.statements[..asked],
                recommendations: &content.recommendations,
            }
        });
        Self {
            edition,
            categories,
        }
    }

    #[must_use]
    pub fn edition(&self) -> Edition {
        self.edition
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> &Category {
        &self.categories[id.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.categories.len().saturating_sub(1)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Edition::default())
    }
}

pub const REFLECTION_PROMPT: &str = "Take a moment to reflect: Which of these recommendations \
feels most appealing to you right now? What small step could you take today to honor your \
need for rest? Consider journaling about what you discovered and how you might integrate \
these practices into your daily routine. 🌱";

struct RestContent {
    statements: [&'static str; STATEMENTS_PER_CATEGORY],
    recommendations: [&'static str; 5],
}

// Indexed by `CategoryId::index`.
static CONTENT: [RestContent; CATEGORY_COUNT] = [
    RestContent {
        statements: [
            "I often feel overwhelmed by racing thoughts",
            "I struggle to stay focused",
            "My brain feels foggy even after sleep",
            "I replay conversations or moments repeatedly",
            "I feel mentally drained after an average day",
        ],
        recommendations: [
            "🧘 Practice 10 minutes of meditation daily",
            "📝 Try brain dumping - write down all your thoughts",
            "🌿 Spend time in nature without distractions",
            "🛁 Take a warm bath with no devices",
            "😴 Create a calming bedtime routine",
        ],
    },
    RestContent {
        statements: [
            "I wake up tired even after a full night's sleep",
            "My body feels sore, tense, or fatigued regularly",
            "I skip movement or stretching even though I know it helps",
            "I rely on caffeine to function normally",
            "I rarely prioritize rest or recovery for my body",
        ],
        recommendations: [
            "😴 Prioritize 7-9 hours of quality sleep",
            "🧘‍♀️ Practice gentle stretching or yoga",
            "💆‍♀️ Get a massage or practice self-massage",
            "🛋️ Take intentional rest breaks during the day",
            "🚶‍♀️ Go for slow, mindful walks",
        ],
    },
    RestContent {
        statements: [
            "I feel emotionally exhausted or easily irritated",
            "I often pretend I'm okay when I'm not",
            "I have little space to express my emotions",
            "I feel responsible for other people's feelings",
            "I long for more honesty and relief",
        ],
        recommendations: [
            "💭 Honor your boundaries and say no when needed",
            "🤗 Practice self-compassion and self-care",
            "📓 Write your feelings down in a journal",
            "💬 Have supportive conversations with trusted friends",
            "🎭 Express emotions through creative outlets",
        ],
    },
    RestContent {
        statements: [
            "I feel drained by social interactions",
            "I say yes to social things when I don't want to",
            "I don't feel like myself around others",
            "I miss energizing, honest relationships",
            "I crave deeper connection",
        ],
        recommendations: [
            "🏠 Spend meaningful time with loved ones",
            "🤝 Seek authentic, supportive interactions",
            "⏰ Schedule alone time to recharge",
            "🚫 Limit interactions that drain your energy",
            "💝 Practice gratitude for positive relationships",
        ],
    },
    RestContent {
        statements: [
            "I feel disconnected from deeper purpose",
            "I feel my daily life lacks meaning",
            "I want more time to reflect or feel inspired",
            "I miss feeling connected to something greater than myself",
            "I want to live in alignment with my values",
        ],
        recommendations: [
            "🙏 Engage in prayer, meditation, or reflection",
            "🌅 Connect with nature and appreciate beauty",
            "📖 Read inspiring or meaningful content",
            "🎯 Align daily actions with your core values",
            "✨ Practice gratitude and mindfulness",
        ],
    },
    RestContent {
        statements: [
            "I feel overstimulated by noise, light, or screens",
            "I spend many hours in front of screens daily",
            "I feel agitated in loud or crowded places",
            "I rarely experience true silence or stillness",
            "I find it hard to relax without digital input",
        ],
        recommendations: [
            "📱 Limit screen time and digital distractions",
            "🕯️ Dim lights and create calming environments",
            "🔇 Turn off notifications and embrace silence",
            "📺 Use blackout curtains in your bedroom",
            "🌙 Have a screen-free hour before bed",
        ],
    },
    RestContent {
        statements: [
            "I feel mentally under-stimulated or bored",
            "I miss learning or creative challenge",
            "I don't have time for interesting or stimulating tasks",
            "I rarely engage in things that inspire me",
            "I feel mentally flat or uninspired",
        ],
        recommendations: [
            "🧩 Engage in stimulating puzzles or games",
            "📚 Read books that challenge and inspire you",
            "🎨 Try creative hobbies or artistic pursuits",
            "💡 Learn something new that excites you",
            "🗣️ Have meaningful conversations about ideas",
        ],
    },
];
