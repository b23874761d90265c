pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod highlight;
pub mod message;
pub mod session;

pub use analyzer::{AnalysisResult, Finding, IndicatorAnalyzer, IndicatorKind, RiskLevel, Severity};
pub use catalog::{Catalog, Scenario};
pub use config::AnalyzerConfig;
pub use highlight::TextHighlighter;
pub use message::EmailMessage;
pub use session::{QuizSession, RoundOutcome, RoundView, SessionReport};
