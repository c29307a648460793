//! Contribution and activity record models.
//!
//! Intellectual contributions and professional engagement activities are the
//! raw material of qualification counts. Both arrive fully materialized from
//! the persistence layer; the engine only reads them.

use serde::{Deserialize, Serialize};

/// The classification of an intellectual contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationType {
    /// Peer-reviewed journal article, the highest-weighted IC subtype.
    PrjArticle,
    /// Additional peer- or editorial-reviewed contribution.
    PeerReviewedOther,
    /// All other intellectual contributions.
    OtherIc,
}

/// A categorized intellectual contribution.
///
/// Callers are expected to pre-filter out uncategorized records; the engine
/// skips contributions with a missing year or publication type rather than
/// failing the whole evaluation.
///
/// # Examples
///
/// ```
/// use qualification_engine::models::{Contribution, PublicationType};
///
/// let contribution = Contribution {
///     id: "ic_001".to_string(),
///     title: "Rolling horizons in accreditation planning".to_string(),
///     year: Some(2024),
///     publication_type: Some(PublicationType::PrjArticle),
/// };
/// assert!(contribution.is_countable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Unique identifier for the contribution.
    pub id: String,
    /// The title of the contribution.
    pub title: String,
    /// The publication year, if recorded.
    #[serde(default)]
    pub year: Option<i32>,
    /// The classification, or `None` if not yet categorized.
    #[serde(default)]
    pub publication_type: Option<PublicationType>,
}

impl Contribution {
    /// Returns true if this contribution can enter qualification counts.
    ///
    /// A contribution needs both a year and a publication type to be counted.
    pub fn is_countable(&self) -> bool {
        self.year.is_some() && self.publication_type.is_some()
    }

    /// Returns true if this is a peer-reviewed journal article.
    pub fn is_prj_article(&self) -> bool {
        self.publication_type == Some(PublicationType::PrjArticle)
    }
}

/// A professional engagement activity.
///
/// Activities are counted per occurrence regardless of type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the activity.
    pub id: String,
    /// The year the activity took place.
    pub year: i32,
    /// The kind of activity (e.g., "consulting", "board membership").
    pub activity_type: String,
    /// Free-text description of the activity.
    #[serde(default)]
    pub description: Option<String>,
}
