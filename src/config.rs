use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Vocabulary tables driving indicator detection and highlighting.
///
/// Every table ships with a built-in default carried over from the training
/// material; a YAML file may override individual tables without restating the
/// rest. Detection order is fixed in the analyzer and is not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_urgency_terms")]
    pub urgency_terms: Vec<String>,
    #[serde(default = "default_reward_terms")]
    pub reward_terms: Vec<String>,
    #[serde(default = "default_sensitive_terms")]
    pub sensitive_terms: Vec<String>,
    #[serde(default = "default_url_shorteners")]
    pub url_shorteners: Vec<String>,
    #[serde(default = "default_impersonated_brands")]
    pub impersonated_brands: Vec<String>,
    #[serde(default = "default_suspicious_tlds")]
    pub suspicious_tlds: Vec<String>,
    #[serde(default = "default_highlight_urgency_terms")]
    pub highlight_urgency_terms: Vec<String>,
    #[serde(default = "default_sensitive_phrases")]
    pub sensitive_phrases: Vec<String>,
    #[serde(default = "default_category_advice")]
    pub category_advice: HashMap<String, String>,
}

fn default_urgency_terms() -> Vec<String> {
    ["urgent", "urgentă", "imediat", "acum", "alertă", "atenție"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_reward_terms() -> Vec<String> {
    // Diacritic-less variants included: real mail frequently drops them.
    [
        "gratuit", "câștigat", "castigat", "premiu", "ofertă", "oferta", "promoție", "promotie",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_sensitive_terms() -> Vec<String> {
    // Order matters: the first term present in the body supplies the excerpt.
    [
        "parolă",
        "parola",
        "password",
        "user",
        "login",
        "autentificare",
        "cont",
        "card",
        "pin",
        "cvv",
        "bancar",
        "transfer",
        "plată",
        "plata",
        "credit",
        "verificare",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_url_shorteners() -> Vec<String> {
    ["bit.ly", "tinyurl", "goo.gl", "t.co"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_impersonated_brands() -> Vec<String> {
    [
        "google",
        "facebook",
        "microsoft",
        "apple",
        "amazon",
        "netflix",
        "paypal",
        "banca",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_suspicious_tlds() -> Vec<String> {
    ["xyz", "info", "online", "site", "tech", "win", "top"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_highlight_urgency_terms() -> Vec<String> {
    [
        "urgent", "imediat", "acum", "alertă", "atenție", "pericol", "expiră", "limitat",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_sensitive_phrases() -> Vec<String> {
    [
        "introduceți parola",
        "confirmați datele",
        "actualizați informațiile",
        "verificați contul",
        "introduceți codul",
        "datele cardului",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_category_advice() -> HashMap<String, String> {
    let entries = [
        (
            "Email-phishing clasic",
            "Verifică întotdeauna adresa expeditorului și nu face click pe link-uri suspecte.",
        ),
        (
            "Spear-phishing",
            "Fii atent la emailurile care par a fi de la persoane cunoscute dar conțin solicitări neobișnuite.",
        ),
        (
            "Fraudă bancară",
            "Băncile nu solicită niciodată informații sensibile prin email. Accesează site-ul bancar direct, nu prin link-uri din email.",
        ),
        (
            "Ofertă falsă",
            "Ofertele prea bune pentru a fi adevărate de obicei nu sunt adevărate. Verifică oferta direct pe site-ul oficial.",
        ),
        (
            "Impersonare CEO",
            "Confirmă telefonic orice solicitare neobișnuită presupus venită de la un superior.",
        ),
        (
            "Actualizare de securitate",
            "Accesează direct site-ul pentru a-ți verifica contul, nu prin link-uri din email.",
        ),
        (
            "Suport tehnic fals",
            "Companiile legitime nu te contactează neanunțat despre probleme tehnice.",
        ),
        (
            "Notificare livrare",
            "Verifică numărul de comandă cu cel din contul tău înainte de a accesa orice link.",
        ),
        (
            "Reînnoire abonament",
            "Verifică statusul abonamentelor direct pe site-ul furnizorului de servicii.",
        ),
        (
            "Donație falsă",
            "Cercetează organizația înainte de a dona și folosește doar site-uri oficiale.",
        ),
        (
            "Oportunitate de investiții",
            "Investițiile legitime nu promit câștiguri garantate sau extraordinare.",
        ),
        (
            "Cupoane și discount-uri",
            "Verifică ofertele pe site-ul oficial al comerciantului.",
        ),
        (
            "Confirmare comandă falsă",
            "Verifică întotdeauna istoricul comenzilor în contul tău înainte de a reacționa.",
        ),
        (
            "Probleme cont social media",
            "Rețelele sociale te notifică despre probleme doar în aplicație sau pe site-ul oficial.",
        ),
        (
            "Verificare cont",
            "Accesează direct site-ul pentru a-ți verifica contul, nu prin link-uri din email.",
        ),
        (
            "Rambursare falsa",
            "Rambursările legitime menționează detalii specifice tranzacției originale.",
        ),
    ];

    entries
        .iter()
        .map(|(category, advice)| (category.to_string(), advice.to_string()))
        .collect()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            urgency_terms: default_urgency_terms(),
            reward_terms: default_reward_terms(),
            sensitive_terms: default_sensitive_terms(),
            url_shorteners: default_url_shorteners(),
            impersonated_brands: default_impersonated_brands(),
            suspicious_tlds: default_suspicious_tlds(),
            highlight_urgency_terms: default_highlight_urgency_terms(),
            sensitive_phrases: default_sensitive_phrases(),
            category_advice: default_category_advice(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path}"))?;
        let config: AnalyzerConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {path}"))?;
        log::info!("Loaded analyzer config from {path}");
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
