//! Passport wire types and the reputation mapping.
//!
//! The mapping is a pure function of the passport response: the score picks
//! a [`Tier`] (and with it a [`Theme`]), and three fixed-order predicates
//! over the credentials and verification flags pick the [`Badge`]s.

use serde::{Deserialize, Serialize};

/// Talent Protocol passport lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct PassportResponse {
    pub passport: Passport,
    pub credentials: Vec<Credential>,
}

/// Aggregate reputation record held by the service for one wallet address.
#[derive(Debug, Clone, Deserialize)]
pub struct Passport {
    /// Service-side passport id.
    #[serde(default)]
    pub id: u64,

    /// Builder score (0-100, assumed; not validated here).
    pub score: u8,

    /// Whether the passport itself is verified.
    pub verified: bool,

    /// Whether the holder passed a personhood check.
    pub human_check: bool,
}

/// A single verifiable claim attached to a passport, e.g. a linked platform
/// account.
#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    pub id: String,

    /// Origin platform tag, e.g. `"github"` or `"coinbase"`.
    pub source: String,

    /// Credential category reported by the API; parsed but unused.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Human-readable credential name; parsed but unused.
    #[serde(default)]
    pub name: String,
}

/// Reputation tier, derived solely from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Elite,
    Rising,
    Rookie,
}

impl Tier {
    /// Classify a score. 80 and 50 are the exact transition points, each
    /// inclusive on the lower bound of its band.
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            Tier::Elite
        } else if score >= 50 {
            Tier::Rising
        } else {
            Tier::Rookie
        }
    }

    /// The visual styling key paired with this tier. The pairing is fixed:
    /// no other tier/theme combination can occur.
    pub fn theme(self) -> Theme {
        match self {
            Tier::Elite => Theme::Gold,
            Tier::Rising => Theme::Silver,
            Tier::Rookie => Theme::Bronze,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Elite => write!(f, "Elite"),
            Tier::Rising => write!(f, "Rising"),
            Tier::Rookie => write!(f, "Rookie"),
        }
    }
}

/// Visual styling key, in 1:1 correspondence with [`Tier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Gold,
    Silver,
    Bronze,
}

/// A short label signaling that one qualifying condition was met.
///
/// Serializes as its display label, emoji included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    /// Any credential sourced from the code-hosting platform.
    #[serde(rename = "Code Architect 🛠️")]
    CodeArchitect,
    /// Any credential sourced from the exchange platform, or any credential
    /// id containing the substring `"base"`.
    #[serde(rename = "Based Native 🔵")]
    BasedNative,
    /// Either passport verification flag set.
    #[serde(rename = "Verified Human ✅")]
    VerifiedHuman,
}

impl Badge {
    /// Display label shown on cards.
    pub fn label(self) -> &'static str {
        match self {
            Badge::CodeArchitect => "Code Architect 🛠️",
            Badge::BasedNative => "Based Native 🔵",
            Badge::VerifiedHuman => "Verified Human ✅",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Flat reputation record, produced fresh on every lookup and owned by the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReputationRecord {
    /// Builder score, copied from the passport.
    pub score: u8,

    /// Tier band for the score.
    pub tier: Tier,

    /// Styling key paired with the tier.
    pub theme: Theme,

    /// True if either verification signal on the passport is set.
    #[serde(rename = "isHuman")]
    pub is_human: bool,

    /// Earned badges, in fixed evaluation order: code platform, exchange /
    /// base-native, human verification. Each predicate contributes at most
    /// one badge, so duplicates cannot occur.
    pub badges: Vec<Badge>,
}

impl ReputationRecord {
    /// Map a passport response into the flat record.
    pub fn from_response(response: &PassportResponse) -> Self {
        let passport = &response.passport;
        let tier = Tier::for_score(passport.score);
        let is_human = passport.verified || passport.human_check;

        let mut badges = Vec::new();
        if response.credentials.iter().any(|c| c.source == "github") {
            badges.push(Badge::CodeArchitect);
        }
        if response
            .credentials
            .iter()
            .any(|c| c.source == "coinbase" || c.id.contains("base"))
        {
            badges.push(Badge::BasedNative);
        }
        if is_human {
            badges.push(Badge::VerifiedHuman);
        }

        Self {
            score: passport.score,
            tier,
            theme: tier.theme(),
            is_human,
            badges,
        }
    }
}
