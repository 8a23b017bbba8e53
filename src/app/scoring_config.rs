//! Scoring configuration
//!
//! Fixed policy constants for the scoring heuristics plus the recognized
//! runtime configuration surface (vocabularies, threshold, weights, caps).
//! Defaults mirror the production vocabularies the service shipped with.

// --- Spam gate signal weights ---

/// Added per distinct matched spam keyword
pub const SPAM_KEYWORD_WEIGHT: f64 = 0.2;

/// Upper bound on the keyword contribution alone
pub const SPAM_KEYWORD_CAP: f64 = 0.9;

/// Added when the normalized text is shorter than [`SPAM_SHORT_TEXT_LEN`]
pub const SPAM_SHORT_TEXT_WEIGHT: f64 = 0.3;

/// Normalized-length threshold for the short-text signal
pub const SPAM_SHORT_TEXT_LEN: usize = 20;

/// Added when more than half of the raw characters are uppercase
pub const SPAM_CAPS_WEIGHT: f64 = 0.2;

/// Uppercase fraction above which the caps signal fires
pub const SPAM_CAPS_RATIO: f64 = 0.5;

/// Added when any character repeats this many times consecutively
pub const SPAM_REPEAT_WEIGHT: f64 = 0.2;
pub const SPAM_REPEAT_RUN: usize = 5;

/// Added when the submitter's history exceeds [`SPAM_HISTORY_LEN`] entries
pub const SPAM_HISTORY_WEIGHT: f64 = 0.2;
pub const SPAM_HISTORY_LEN: usize = 10;

/// Added when a prior report duplicates the current text
pub const SPAM_DUPLICATE_WEIGHT: f64 = 0.4;

/// Jaccard word-set similarity above which two reports count as duplicates
pub const SPAM_DUPLICATE_SIMILARITY: f64 = 0.8;

// --- Text severity tier weights ---

pub const TEXT_HIGH_WEIGHT: f64 = 3.0;
pub const TEXT_MEDIUM_WEIGHT: f64 = 1.5;
pub const TEXT_LOW_WEIGHT: f64 = 0.5;

/// Divisor scaling the weighted keyword sum into [0, 10]
pub const TEXT_SCALE_DIVISOR: f64 = 5.0;

/// Share of the blended score taken by the primary model when present
pub const TEXT_MODEL_BLEND: f64 = 0.7;

/// Share of the blended score taken by the keyword heuristic
pub const TEXT_HEURISTIC_BLEND: f64 = 0.3;

// --- Media severity weights ---

pub const MEDIA_HIGH_WEIGHT: f64 = 5.0;
pub const MEDIA_MEDIUM_WEIGHT: f64 = 2.5;
pub const MEDIA_LOW_WEIGHT: f64 = 1.0;

/// Multiplier applied to the weighted detection sum before capping
pub const MEDIA_DETECTION_SCALE: f64 = 2.0;

/// Pixel area (in px) at which the size factor saturates
pub const MEDIA_AREA_SATURATION: f64 = 1_000_000.0;

/// Points contributed by a full-size image in the pixel fallback
pub const MEDIA_AREA_POINTS: f64 = 3.0;

/// Points contributed by full red intensity (color images)
pub const MEDIA_RED_POINTS: f64 = 7.0;

/// Points contributed by full luminance (grayscale images)
pub const MEDIA_LUMA_POINTS: f64 = 5.0;

/// Deterministic score for a present but undecodable media item.
/// Midpoint of the historical [0.5, 3.0] range: "unknown but present",
/// never zero and never an error.
pub const UNDECODABLE_MEDIA_SCORE: f64 = 1.75;

/// Weights combining the component scores into the emergency score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationWeights {
    pub text: f64,
    pub media: f64,
    pub credibility: f64,
}

impl Default for AggregationWeights {
    fn default() -> Self {
        // Media outweighs text slightly: visual evidence is treated as the
        // more reliable signal under this policy.
        Self {
            text: 0.4,
            media: 0.5,
            credibility: 0.1,
        }
    }
}

/// Three-tier keyword vocabulary, highest severity first.
#[derive(Debug, Clone, Default)]
pub struct TierVocabulary {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl TierVocabulary {
    pub fn new<S: Into<String> + Clone>(high: &[S], medium: &[S], low: &[S]) -> Self {
        let to_owned = |terms: &[S]| terms.iter().cloned().map(Into::into).collect();
        Self {
            high: to_owned(high),
            medium: to_owned(medium),
            low: to_owned(low),
        }
    }
}

/// Recognized configuration surface for the scoring pipeline.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Keyword list for the spam fallback heuristic
    pub spam_keywords: Vec<String>,
    /// Violence vocabulary for text severity
    pub text_vocabulary: TierVocabulary,
    /// Object-class vocabulary for media severity
    pub media_vocabulary: TierVocabulary,
    /// Spam probability above which a report is discarded as spam
    pub spam_threshold: f64,
    pub weights: AggregationWeights,
    /// Media items beyond this count are not scored
    pub max_media_batch: usize,
    /// Prior reports beyond this count are not scanned
    pub max_history_scan: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            spam_keywords: default_spam_keywords(),
            text_vocabulary: default_text_vocabulary(),
            media_vocabulary: default_media_vocabulary(),
            spam_threshold: 0.8,
            weights: AggregationWeights::default(),
            max_media_batch: 10,
            max_history_scan: 50,
        }
    }
}

fn default_spam_keywords() -> Vec<String> {
    [
        "viagra",
        "cialis",
        "casino",
        "lottery",
        "winner",
        "buy now",
        "free offer",
        "earn money",
        "work from home",
        "make money fast",
        "discount",
        "limited time",
        "click here",
        "subscribe",
        "unsubscribe",
        "nigerian prince",
        "investment opportunity",
        "bitcoin",
        "crypto",
        "prize",
        "congratulations",
        "claim your",
        "urgent",
        "warranty",
        "sex",
        "porn",
        "xxx",
        "dating",
        "singles",
        "meet women",
        "meet men",
        "enlargement",
        "weight loss",
        "diet",
        "pills",
        "medication",
        "prescription",
        "pharmacy",
        "test message",
        "testing",
        "asdf",
        "qwerty",
        "lorem ipsum",
        "hello world",
        "please ignore",
        "this is a test",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_text_vocabulary() -> TierVocabulary {
    TierVocabulary::new(
        &[
            "murder",
            "killing",
            "death",
            "gun",
            "shoot",
            "shot",
            "knife",
            "stab",
            "blood",
            "weapon",
            "attack",
            "kill",
            "die",
            "dead",
            "assault",
            "beaten",
            "injury",
            "injured",
            "wound",
            "wounded",
            "emergency",
            "urgent",
            "immediate",
            "severe",
            "serious",
            "critical",
            "life-threatening",
            "dangerous",
            "lethal",
            "firearm",
            "bleeding",
            "threat",
            "threatened",
            "suicide",
            "homicide",
        ],
        &[
            "fight",
            "hit",
            "punch",
            "kick",
            "beat",
            "assault",
            "abuse",
            "hurt",
            "pain",
            "suffer",
            "victim",
            "violent",
            "harassment",
            "stalking",
            "follow",
            "threaten",
            "intimidate",
            "fear",
            "scared",
            "afraid",
            "unsafe",
            "danger",
            "bruise",
            "harm",
            "damage",
            "physical",
            "attack",
            "aggressive",
            "aggression",
        ],
        &[
            "argument",
            "dispute",
            "conflict",
            "disagreement",
            "verbal",
            "yell",
            "shout",
            "scream",
            "insult",
            "offensive",
            "inappropriate",
            "uncomfortable",
            "uneasy",
            "worried",
            "concern",
            "suspicious",
            "strange",
            "odd",
            "unusual",
            "disturbing",
            "cyber",
            "online",
            "message",
            "text",
            "social media",
            "post",
            "comment",
        ],
    )
}

fn default_media_vocabulary() -> TierVocabulary {
    TierVocabulary::new(
        &[
            "knife",
            "gun",
            "rifle",
            "pistol",
            "weapon",
            "blood",
            "fire",
            "explosion",
        ],
        &[
            "baseball bat",
            "bottle",
            "stick",
            "chain",
            "crowbar",
            "hammer",
            "wrench",
            "scissors",
            "rock",
        ],
        &["person", "car", "truck", "motorcycle", "bicycle", "dog"],
    )
}
