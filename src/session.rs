use crate::analyzer::{AnalysisResult, IndicatorAnalyzer};
use crate::catalog::Catalog;
use crate::message::EmailMessage;
use anyhow::bail;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One presented pair. Which slot holds the phish stays internal until the
/// answer is submitted.
#[derive(Debug, Clone)]
pub struct RoundView {
    pub category: String,
    pub emails: [EmailMessage; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub category: String,
    pub correct: bool,
    pub phish_slot: usize,
    pub explanation: String,
    /// Indicator analysis of the phishing email, shown post-answer.
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub score: usize,
    pub total: usize,
    pub accuracy_percent: f64,
    pub started_at: DateTime<Utc>,
    pub duration_seconds: u64,
    pub outcomes: Vec<RoundOutcome>,
    pub missed_categories: Vec<String>,
}

struct ActiveRound {
    view: RoundView,
    phish_slot: usize,
    explanation: String,
    analysis: AnalysisResult,
}

/// Training session over a catalog: each category is asked once, in random
/// order, with the phish slot drawn from a pre-shuffled alternating sequence
/// so a session can never be all-phish-left.
pub struct QuizSession {
    catalog: Catalog,
    analyzer: IndicatorAnalyzer,
    rng: StdRng,
    phish_positions: Vec<bool>,
    active: Option<ActiveRound>,
    outcomes: Vec<RoundOutcome>,
    score: usize,
    total: usize,
    started_at: DateTime<Utc>,
    started_instant: Instant,
}

impl QuizSession {
    pub fn new(catalog: Catalog, analyzer: IndicatorAnalyzer, mut rng: StdRng) -> Self {
        let rounds = catalog.len();
        let mut phish_positions: Vec<bool> = [true, false]
            .iter()
            .copied()
            .cycle()
            .take(2 * (rounds / 2 + 1))
            .collect();
        phish_positions.shuffle(&mut rng);

        QuizSession {
            catalog,
            analyzer,
            rng,
            phish_positions,
            active: None,
            outcomes: Vec::new(),
            score: 0,
            total: 0,
            started_at: Utc::now(),
            started_instant: Instant::now(),
        }
    }

    pub fn with_seed(catalog: Catalog, analyzer: IndicatorAnalyzer, seed: u64) -> Self {
        Self::new(catalog, analyzer, StdRng::seed_from_u64(seed))
    }

    /// The pending round, or a freshly drawn one. `None` once every category
    /// has been answered.
    pub fn next_round(&mut self) -> Option<&RoundView> {
        if self.active.is_none() {
            let remaining: Vec<usize> = (0..self.catalog.len())
                .filter(|&i| {
                    let category = &self.catalog.scenarios[i].category;
                    !self.outcomes.iter().any(|o| &o.category == category)
                })
                .collect();
            let &index = remaining.choose(&mut self.rng)?;
            let scenario = self.catalog.scenarios[index].clone();

            let phish_first = self.phish_positions.pop().unwrap_or(true);
            let phish_slot = if phish_first { 0 } else { 1 };
            let fake = scenario.fake_message();
            let real = scenario.real_message();
            let emails = if phish_first {
                [fake.clone(), real]
            } else {
                [real, fake.clone()]
            };

            let analysis = self.analyzer.analyze(&fake, &scenario.category);
            log::debug!(
                "Round for '{}': phish in slot {}, risk score {}",
                scenario.category,
                phish_slot,
                analysis.total_risk_score
            );

            self.active = Some(ActiveRound {
                view: RoundView {
                    category: scenario.category,
                    emails,
                },
                phish_slot,
                explanation: scenario.explanation,
                analysis,
            });
        }

        self.active.as_ref().map(|round| &round.view)
    }

    /// Record the answer for the pending round. `choice` is the slot index
    /// the trainee called out as phishing.
    pub fn submit(&mut self, choice: usize) -> anyhow::Result<RoundOutcome> {
        if choice > 1 {
            bail!("choice must be slot 0 or 1, got {choice}");
        }
        let Some(round) = self.active.take() else {
            bail!("no active round to submit");
        };

        let correct = choice == round.phish_slot;
        self.total += 1;
        if correct {
            self.score += 1;
        }

        let outcome = RoundOutcome {
            category: round.view.category,
            correct,
            phish_slot: round.phish_slot,
            explanation: round.explanation,
            analysis: round.analysis,
        };
        self.outcomes.push(outcome.clone());
        Ok(outcome)
    }

    pub fn is_complete(&self) -> bool {
        self.active.is_none() && self.outcomes.len() >= self.catalog.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn report(&self) -> SessionReport {
        let accuracy_percent = if self.total > 0 {
            self.score as f64 / self.total as f64 * 100.0
        } else {
            0.0
        };
        let missed_categories = self
            .outcomes
            .iter()
            .filter(|o| !o.correct)
            .map(|o| o.category.clone())
            .collect();

        SessionReport {
            score: self.score,
            total: self.total,
            accuracy_percent,
            started_at: self.started_at,
            duration_seconds: self.started_instant.elapsed().as_secs(),
            outcomes: self.outcomes.clone(),
            missed_categories,
        }
    }
}
