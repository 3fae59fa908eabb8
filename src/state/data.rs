/// Static page content
///
/// Everything the page displays is fixed at compile time. These structs are
/// the data model that flows from here into the UI layer.

/// Glyph used for an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cat,
    Heart,
    Info,
    Paw,
}

impl Icon {
    /// Unicode glyph rendered for this icon
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Cat => "🐈",
            Icon::Heart => "♥",
            Icon::Info => "ℹ",
            Icon::Paw => "🐾",
        }
    }
}

/// Accent color of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Blue,
    Orange,
    Gray,
}

/// Represents a single cat breed shown in the breeds panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedRecord {
    /// Display name (e.g., "Maine Coon")
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    pub icon: Icon,
    pub tint: Tint,
    /// Star rating 0-5, None when the breed is unrated
    pub rating: Option<u8>,
}

/// Highest rating a breed can show
pub const MAX_RATING: u8 = 5;

impl BreedRecord {
    /// Number of filled stars to draw (0 if unrated, never above MAX_RATING)
    pub fn star_count(&self) -> u8 {
        self.rating.unwrap_or(0).min(MAX_RATING)
    }
}

/// A slideshow picture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRecord {
    pub url: &'static str,
}

impl ImageRecord {
    /// Alt text shown while the picture is loading or if it failed
    pub fn alt_text(index: usize) -> String {
        format!("Cat {}", index + 1)
    }
}

/// A decorative badge in the bottom row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub icon: Icon,
}

/// Breeds in display order
pub const BREEDS: [BreedRecord; 3] = [
    BreedRecord {
        name: "Siamese",
        description: "Known for their distinctive color points and blue eyes.",
        icon: Icon::Cat,
        tint: Tint::Blue,
        rating: Some(5),
    },
    BreedRecord {
        name: "Maine Coon",
        description: "One of the largest domestic cat breeds, known for their intelligence and playful personality.",
        icon: Icon::Cat,
        tint: Tint::Orange,
        rating: Some(4),
    },
    BreedRecord {
        name: "Persian",
        description: "Recognized for their long fur and flat faces.",
        icon: Icon::Cat,
        tint: Tint::Gray,
        rating: Some(3),
    },
];

/// Slideshow pictures in display order
pub const IMAGES: [ImageRecord; 3] = [
    ImageRecord {
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    },
    ImageRecord {
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
    },
    ImageRecord {
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bb/Kittyply_edit1.jpg/1200px-Kittyply_edit1.jpg",
    },
];

pub const BADGES: [Badge; 3] = [
    Badge { label: "Playful", icon: Icon::Paw },
    Badge { label: "Affectionate", icon: Icon::Heart },
    Badge { label: "Intelligent", icon: Icon::Info },
];

pub const OVERVIEW_TITLE: &str = "Feline Fascination";

pub const OVERVIEW_TEXT: &str = "Cats are fascinating creatures that have been domesticated for thousands of years. \
They are known for their independence, agility, and affectionate nature. \
Cats come in various breeds, each with its unique characteristics and personalities.";

pub const BREEDS_HEADING: &str = "Popular Cat Breeds";

pub const CARE_TITLE: &str = "Cat Care Essentials";

pub const CARE_TIPS: [&str; 5] = [
    "Provide a balanced diet",
    "Regular veterinary check-ups",
    "Keep the litter box clean",
    "Offer mental and physical stimulation",
    "Show love and affection",
];
