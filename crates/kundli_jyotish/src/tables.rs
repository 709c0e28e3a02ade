//! Static descriptive tables used by the interpretation synthesizer.

use kundli_vedic_base::{Nakshatra, Rashi};

/// Descriptive traits of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RashiTraits {
    pub qualities: &'static str,
    pub element: &'static str,
    /// Traditional ruler, with the modern co-ruler where one is commonly cited.
    pub ruler: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
}

/// Name and themes of a bhava.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BhavaTheme {
    /// Sanskrit name, e.g. "Tanu Bhava".
    pub name: &'static str,
    pub meaning: &'static str,
    /// Comma-separated list of governed matters.
    pub governs: &'static str,
}

impl BhavaTheme {
    /// First item of [`Self::governs`].
    pub fn primary_concern(&self) -> &'static str {
        self.governs.split(',').next().unwrap_or(self.governs)
    }
}

static RASHI_TRAITS: [RashiTraits; 12] = [
    RashiTraits {
        qualities: "energetic, confident, and impulsive",
        element: "Fire",
        ruler: "Mars",
        positive: "leadership, courage, enthusiasm",
        negative: "impatience, aggression, impulsiveness",
    },
    RashiTraits {
        qualities: "reliable, practical, and stubborn",
        element: "Earth",
        ruler: "Venus",
        positive: "patience, reliability, determination",
        negative: "possessiveness, stubbornness, resistance to change",
    },
    RashiTraits {
        qualities: "versatile, curious, and inconsistent",
        element: "Air",
        ruler: "Mercury",
        positive: "adaptability, communication skills, quick-thinking",
        negative: "nervousness, inconsistency, indecisiveness",
    },
    RashiTraits {
        qualities: "intuitive, emotional, and protective",
        element: "Water",
        ruler: "Moon",
        positive: "intuition, empathy, tenacity",
        negative: "moodiness, oversensitivity, clinginess",
    },
    RashiTraits {
        qualities: "dramatic, confident, and generous",
        element: "Fire",
        ruler: "Sun",
        positive: "creativity, generosity, loyalty",
        negative: "domineering, melodramatic, stubborn",
    },
    RashiTraits {
        qualities: "analytical, practical, and perfectionist",
        element: "Earth",
        ruler: "Mercury",
        positive: "analytical skills, attention to detail, service-oriented",
        negative: "critical, obsessive, worrying",
    },
    RashiTraits {
        qualities: "diplomatic, fair-minded, and sociable",
        element: "Air",
        ruler: "Venus",
        positive: "diplomacy, harmony, justice",
        negative: "indecisiveness, avoidance of confrontation, dependence",
    },
    RashiTraits {
        qualities: "passionate, determined, and intense",
        element: "Water",
        ruler: "Mars/Pluto",
        positive: "resourcefulness, passion, loyalty",
        negative: "jealousy, secretiveness, resentfulness",
    },
    RashiTraits {
        qualities: "optimistic, freedom-loving, and philosophical",
        element: "Fire",
        ruler: "Jupiter",
        positive: "optimism, honesty, adventure",
        negative: "carelessness, restlessness, overconfidence",
    },
    RashiTraits {
        qualities: "disciplined, responsible, and reserved",
        element: "Earth",
        ruler: "Saturn",
        positive: "discipline, responsibility, ambition",
        negative: "pessimism, rigidity, coldness",
    },
    RashiTraits {
        qualities: "independent, humanitarian, and intellectual",
        element: "Air",
        ruler: "Saturn/Uranus",
        positive: "innovation, humanitarianism, independence",
        negative: "eccentricity, aloofness, rebellion",
    },
    RashiTraits {
        qualities: "compassionate, intuitive, and dreamy",
        element: "Water",
        ruler: "Jupiter/Neptune",
        positive: "compassion, artistic ability, intuition",
        negative: "escapism, delusion, self-pity",
    },
];

static NAKSHATRA_TRAITS: [&str; 27] = [
    "swift, competitive, healing abilities",
    "transformative, ambitious, bearing burdens",
    "sharp, focused, passionate about truth",
    "nurturing, sensual, artistic, growth-oriented",
    "gentle, searching, curious, adaptable",
    "turbulent, passionate, philosophical",
    "jovial, generous, wise, renewal-oriented",
    "nourishing, prosperous, protective",
    "mysterious, intuitive, healing, seductive",
    "regal, ambitious, proud, influential",
    "playful, creative, indulgent, passionate",
    "diplomatic, balanced, prosperity-oriented",
    "skilled, practical, detail-oriented",
    "multi-talented, artistic, bright, charismatic",
    "independent, self-directed, flexible",
    "determined, goal-oriented, strategic",
    "friendly, harmonious, successful",
    "courageous, protective, powerful",
    "deep, transformative, searching for roots",
    "energetic, invincible, fierce",
    "universally balanced, ethical, expansive",
    "connected, receptive, learning-oriented",
    "wealthy, musical, swift, generous",
    "healing, secretive, mystical, innovative",
    "fiery, intense, transformative",
    "balanced, truthful, visionary",
    "prosperous, nurturing, mystical, fulfilled",
];

static BHAVA_THEMES: [BhavaTheme; 12] = [
    BhavaTheme {
        name: "Tanu Bhava",
        meaning: "self-identity, physical appearance, and general well-being",
        governs: "personality, health, character, and constitution",
    },
    BhavaTheme {
        name: "Dhana Bhava",
        meaning: "finances, personal resources, and speech",
        governs: "wealth, family, early education, and value system",
    },
    BhavaTheme {
        name: "Sahaja Bhava",
        meaning: "communication, courage, and siblings",
        governs: "communication skills, short journeys, and immediate environment",
    },
    BhavaTheme {
        name: "Sukha Bhava",
        meaning: "home, mother, emotions, and inner happiness",
        governs: "domestic environment, property, and psychological foundations",
    },
    BhavaTheme {
        name: "Putra Bhava",
        meaning: "creativity, romance, and children",
        governs: "intelligence, education, creative expression, and progeny",
    },
    BhavaTheme {
        name: "Ari Bhava",
        meaning: "health, service, and obstacles",
        governs: "daily routines, illness, enemies, and debts",
    },
    BhavaTheme {
        name: "Yuvati Bhava",
        meaning: "partnerships, marriage, and business relationships",
        governs: "spouse, contracts, and all one-to-one relationships",
    },
    BhavaTheme {
        name: "Randhra Bhava",
        meaning: "transformation, joint resources, and mysteries",
        governs: "life changes, occult knowledge, inheritance, and longevity",
    },
    BhavaTheme {
        name: "Dharma Bhava",
        meaning: "higher education, philosophy, and spiritual practice",
        governs: "religion, ethics, long journeys, and higher purpose",
    },
    BhavaTheme {
        name: "Karma Bhava",
        meaning: "career, public reputation, and authority figures",
        governs: "profession, social status, and father",
    },
    BhavaTheme {
        name: "Labha Bhava",
        meaning: "friendships, gains, and aspirations",
        governs: "social groups, income, and fulfillment of desires",
    },
    BhavaTheme {
        name: "Vyaya Bhava",
        meaning: "spirituality, losses, and the subconscious",
        governs: "seclusion, expenses, foreign places, and spiritual liberation",
    },
];

/// Traits of a rashi.
pub fn rashi_traits(rashi: Rashi) -> &'static RashiTraits {
    &RASHI_TRAITS[rashi.index() as usize]
}

/// Trait keywords of a nakshatra.
pub fn nakshatra_traits(nakshatra: Nakshatra) -> &'static str {
    NAKSHATRA_TRAITS[nakshatra.index() as usize]
}

/// Theme of a bhava by number, 1-12.
pub fn bhava_theme(number: u8) -> Option<&'static BhavaTheme> {
    BHAVA_THEMES.get(usize::from(number).checked_sub(1)?)
}
