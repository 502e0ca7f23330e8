//! Presentation of answer sources: rank emblem, relevance percent and tier.
//!
//! Sources are shown in the order the service returned them. Nothing here
//! re-sorts; position in the slice is the rank.

use crate::shared::i18n::texts;
use contracts::domain::a001_assistant_chat::aggregate::Source;
use contracts::enums::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    /// >0.8 high, >0.6 medium, everything else low
    pub fn from_relevance(relevance: f64) -> Self {
        if relevance > 0.8 {
            RelevanceTier::High
        } else if relevance > 0.6 {
            RelevanceTier::Medium
        } else {
            RelevanceTier::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RelevanceTier::High => "source__relevance--high",
            RelevanceTier::Medium => "source__relevance--medium",
            RelevanceTier::Low => "source__relevance--low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankEmblem {
    Gold,
    Silver,
    Bronze,
}

impl RankEmblem {
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(RankEmblem::Gold),
            1 => Some(RankEmblem::Silver),
            2 => Some(RankEmblem::Bronze),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RankEmblem::Gold => "🥇",
            RankEmblem::Silver => "🥈",
            RankEmblem::Bronze => "🥉",
        }
    }
}

/// Relevance in [0, 1] as a rounded percentage; out-of-range scores are clamped
pub fn relevance_percent(relevance: f64) -> u8 {
    if relevance.is_nan() {
        return 0;
    }
    (relevance.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// One source row ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedSource {
    pub position: usize,
    pub emblem: Option<RankEmblem>,
    pub percent: u8,
    pub tier: RelevanceTier,
    pub source: Source,
}

impl DecoratedSource {
    /// Emblem for the top three, "#n" afterwards
    pub fn rank_label(&self) -> String {
        match self.emblem {
            Some(emblem) => emblem.symbol().to_string(),
            None => format!("#{}", self.position + 1),
        }
    }

    /// "- Член 12" / "- Article 12", empty when the source has no article
    pub fn article_label(&self, language: Language) -> Option<String> {
        self.source
            .article
            .map(|article| format!("- {} {}", texts(language).article, article))
    }

    /// "(95% точност)" / "(95% accuracy)"
    pub fn accuracy_label(&self, language: Language) -> String {
        format!("({}% {})", self.percent, texts(language).accuracy)
    }
}

pub fn decorate(sources: &[Source]) -> Vec<DecoratedSource> {
    sources
        .iter()
        .enumerate()
        .map(|(position, source)| DecoratedSource {
            position,
            emblem: RankEmblem::for_position(position),
            percent: relevance_percent(source.relevance),
            tier: RelevanceTier::from_relevance(source.relevance),
            source: source.clone(),
        })
        .collect()
}
