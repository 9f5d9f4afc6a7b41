//! Priority matrix
//!
//! Buckets scored ideas into a 2×2 impact/effort matrix. The classifier is
//! total: items without a usable impact and effort are filtered out and
//! counted, never rejected, because partially scored ideas are a normal
//! state while an idea is being worked on.

use discovery_model::{IdeaId, IdeaRecord};
use serde::{Deserialize, Serialize};

/// Impact at or above this is "high impact"
pub const HIGH_IMPACT_THRESHOLD: i64 = 4;

/// Effort at or below this is "low effort"
pub const LOW_EFFORT_THRESHOLD: i64 = 2;

const SCORE_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Anything carrying impact and effort scores
pub trait Scoreable {
    /// Impact score, if set
    fn impact_score(&self) -> Option<i64>;

    /// Effort score, if set
    fn effort_score(&self) -> Option<i64>;
}

impl Scoreable for IdeaRecord {
    #[inline]
    fn impact_score(&self) -> Option<i64> {
        self.impact_score
    }

    #[inline]
    fn effort_score(&self) -> Option<i64> {
        self.effort_score
    }
}

/// Minimal scored idea for callers that do not hold full records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredIdea {
    /// Idea identifier
    pub id: IdeaId,
    /// Impact score
    pub impact_score: Option<i64>,
    /// Effort score
    pub effort_score: Option<i64>,
}

impl ScoredIdea {
    /// Create scored idea
    #[inline]
    #[must_use]
    pub fn new(id: IdeaId, impact_score: Option<i64>, effort_score: Option<i64>) -> Self {
        Self {
            id,
            impact_score,
            effort_score,
        }
    }
}

impl Scoreable for ScoredIdea {
    #[inline]
    fn impact_score(&self) -> Option<i64> {
        self.impact_score
    }

    #[inline]
    fn effort_score(&self) -> Option<i64> {
        self.effort_score
    }
}

impl From<&IdeaRecord> for ScoredIdea {
    fn from(idea: &IdeaRecord) -> Self {
        Self::new(idea.id, idea.impact_score, idea.effort_score)
    }
}

/// Matrix quadrant, ordered by priority (do first = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// High impact, low effort
    QuickWins,
    /// High impact, high effort
    MajorProjects,
    /// Low impact, low effort
    FillIns,
    /// Low impact, high effort
    MoneyPit,
}

impl Quadrant {
    /// All quadrants in priority order
    pub const ALL: [Self; 4] = [
        Self::QuickWins,
        Self::MajorProjects,
        Self::FillIns,
        Self::MoneyPit,
    ];

    /// Quadrant for an impact/effort pair
    #[must_use]
    pub fn of(impact: i64, effort: i64) -> Self {
        let high_impact = impact >= HIGH_IMPACT_THRESHOLD;
        let low_effort = effort <= LOW_EFFORT_THRESHOLD;

        match (high_impact, low_effort) {
            (true, true) => Self::QuickWins,
            (true, false) => Self::MajorProjects,
            (false, true) => Self::FillIns,
            (false, false) => Self::MoneyPit,
        }
    }

    /// Priority rank, 1 is highest
    #[inline]
    #[must_use]
    pub fn priority(&self) -> u8 {
        match self {
            Self::QuickWins => 1,
            Self::MajorProjects => 2,
            Self::FillIns => 3,
            Self::MoneyPit => 4,
        }
    }

    /// Display title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::QuickWins => "Quick Wins",
            Self::MajorProjects => "Major Projects",
            Self::FillIns => "Fill-ins",
            Self::MoneyPit => "Money Pit",
        }
    }

    /// Impact/effort description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::QuickWins => "High Impact, Low Effort",
            Self::MajorProjects => "High Impact, High Effort",
            Self::FillIns => "Low Impact, Low Effort",
            Self::MoneyPit => "Low Impact, High Effort",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Items that landed in one quadrant, in input order
#[derive(Debug, Clone, Serialize)]
pub struct Bucket<'a, T> {
    quadrant: Quadrant,
    items: Vec<&'a T>,
}

impl<'a, T> Bucket<'a, T> {
    fn new(quadrant: Quadrant) -> Self {
        Self {
            quadrant,
            items: Vec::new(),
        }
    }

    /// Quadrant of this bucket
    #[inline]
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Items in input order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    /// Number of items
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Classified ideas
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityMatrix<'a, T> {
    /// High impact, low effort
    pub quick_wins: Bucket<'a, T>,
    /// High impact, high effort
    pub major_projects: Bucket<'a, T>,
    /// Low impact, low effort
    pub fill_ins: Bucket<'a, T>,
    /// Low impact, high effort
    pub money_pit: Bucket<'a, T>,
    /// Items left out for a missing or malformed score
    pub excluded: usize,
}

impl<'a, T> PriorityMatrix<'a, T> {
    fn empty() -> Self {
        Self {
            quick_wins: Bucket::new(Quadrant::QuickWins),
            major_projects: Bucket::new(Quadrant::MajorProjects),
            fill_ins: Bucket::new(Quadrant::FillIns),
            money_pit: Bucket::new(Quadrant::MoneyPit),
            excluded: 0,
        }
    }

    fn bucket_mut(&mut self, quadrant: Quadrant) -> &mut Bucket<'a, T> {
        match quadrant {
            Quadrant::QuickWins => &mut self.quick_wins,
            Quadrant::MajorProjects => &mut self.major_projects,
            Quadrant::FillIns => &mut self.fill_ins,
            Quadrant::MoneyPit => &mut self.money_pit,
        }
    }

    /// Bucket for a quadrant
    #[must_use]
    pub fn bucket(&self, quadrant: Quadrant) -> &Bucket<'a, T> {
        match quadrant {
            Quadrant::QuickWins => &self.quick_wins,
            Quadrant::MajorProjects => &self.major_projects,
            Quadrant::FillIns => &self.fill_ins,
            Quadrant::MoneyPit => &self.money_pit,
        }
    }

    /// All buckets in priority order
    #[must_use]
    pub fn buckets(&self) -> [&Bucket<'a, T>; 4] {
        Quadrant::ALL.map(|quadrant| self.bucket(quadrant))
    }

    /// Number of classified items (excluded items not counted)
    #[must_use]
    pub fn classified_count(&self) -> usize {
        self.buckets().iter().map(|bucket| bucket.count()).sum()
    }

    /// Check if nothing was classified
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classified_count() == 0
    }
}

/// Priority matrix classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadrantClassifier;

impl QuadrantClassifier {
    /// Create new classifier instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Impact and effort of an item, if both are usable
    ///
    /// Zero and anything outside 1-5 count as malformed.
    #[must_use]
    pub fn scores_of<T: Scoreable + ?Sized>(item: &T) -> Option<(i64, i64)> {
        let impact = item.impact_score().filter(|v| SCORE_RANGE.contains(v))?;
        let effort = item.effort_score().filter(|v| SCORE_RANGE.contains(v))?;
        Some((impact, effort))
    }

    /// Partition items into the four quadrants
    ///
    /// Every item with usable scores lands in exactly one bucket; bucket
    /// order follows input order.
    pub fn classify<'a, T: Scoreable>(&self, items: &'a [T]) -> PriorityMatrix<'a, T> {
        let mut matrix = PriorityMatrix::empty();

        for item in items {
            match Self::scores_of(item) {
                Some((impact, effort)) => {
                    matrix.bucket_mut(Quadrant::of(impact, effort)).items.push(item);
                }
                None => matrix.excluded += 1,
            }
        }

        tracing::debug!(
            classified = matrix.classified_count(),
            excluded = matrix.excluded,
            "classified ideas into priority matrix"
        );
        matrix
    }
}
