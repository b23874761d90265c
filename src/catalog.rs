use crate::message::EmailMessage;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One quiz scenario: a legitimate email and its phishing counterpart for the
/// same pretext, plus the post-answer explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Phishing archetype label, e.g. "Fraudă bancară". Keyed as `type` in
    /// the JSON contract.
    #[serde(rename = "type")]
    pub category: String,
    pub real: ScenarioEmail,
    pub fake: ScenarioEmail,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEmail {
    pub subject: String,
    pub body: String,
}

impl Scenario {
    pub fn real_message(&self) -> EmailMessage {
        self.to_message(&self.real)
    }

    pub fn fake_message(&self) -> EmailMessage {
        self.to_message(&self.fake)
    }

    fn to_message(&self, email: &ScenarioEmail) -> EmailMessage {
        EmailMessage {
            subject: email.subject.clone(),
            body: email.body.clone(),
            sender: None,
            sender_address: None,
            category: Some(self.category.clone()),
        }
    }
}

/// The scenario catalog. Serialized form is a bare JSON array so existing
/// `examples.json` files keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub scenarios: Vec<Scenario>,
}

impl Catalog {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file: {path}"))?;
        let catalog: Catalog = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse catalog file: {path}"))?;
        log::info!("Loaded {} scenarios from {path}", catalog.len());
        Ok(catalog)
    }

    /// Load from disk, falling back to the compiled-in scenarios when the
    /// file is missing or malformed.
    pub fn load_or_builtin(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("Failed to load catalog, using built-in scenarios: {e:#}");
                Self::builtin()
            }
        }
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.scenarios)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write catalog file: {path}"))?;
        Ok(())
    }

    /// Structural checks: the quiz keys progress by category, so categories
    /// must be unique and every email must have text to show.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.scenarios.is_empty() {
            bail!("catalog contains no scenarios");
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (index, scenario) in self.scenarios.iter().enumerate() {
            if scenario.category.trim().is_empty() {
                bail!("scenario {index} has an empty category");
            }
            if !seen.insert(scenario.category.as_str()) {
                bail!("duplicate scenario category: {}", scenario.category);
            }
            for (label, email) in [("real", &scenario.real), ("fake", &scenario.fake)] {
                if email.subject.trim().is_empty() {
                    bail!(
                        "scenario '{}' has an empty {label} subject",
                        scenario.category
                    );
                }
                if email.body.trim().is_empty() {
                    bail!("scenario '{}' has an empty {label} body", scenario.category);
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// The fallback training set.
    pub fn builtin() -> Self {
        Catalog {
            scenarios: vec![
                Scenario {
                    category: "Email-phishing clasic".to_string(),
                    real: ScenarioEmail {
                        subject: "Factura lunii martie de la FurnizorulTau".to_string(),
                        body: "Stimate client,\n\nVă transmitem atașat factura pentru luna martie.\n\nCu stimă,\nEchipa FurnizorulTau.".to_string(),
                    },
                    fake: ScenarioEmail {
                        subject: "ACTIVITATE SUSPECTĂ pe contul tău – Verifică ACUM".to_string(),
                        body: "Contul tău a fost compromis. Click aici http://bit.ly/secure-check pentru resetare imediată.".to_string(),
                    },
                    explanation: "Fals: ton de urgență, link scurt, domeniu neoficial. Real: limbaj formal, atașament legitim.".to_string(),
                },
                Scenario {
                    category: "Spear-phishing".to_string(),
                    real: ScenarioEmail {
                        subject: "Întâlnirea de proiect - agenda".to_string(),
                        body: "Bună ziua,\n\nVă trimit agenda pentru întâlnirea noastră de săptămâna viitoare.\nVă rog să confirmați participarea.\n\nCu stimă,\nMaria".to_string(),
                    },
                    fake: ScenarioEmail {
                        subject: "Referitor la proiectul nostru".to_string(),
                        body: "Salut,\n\nAm observat că nu ai trimis încă documentele pentru proiectul X.\nDescarcă formularul de aici: http://docs-google.net/form și trimite-l urgent.\n\nMulțumesc,\nAndrei".to_string(),
                    },
                    explanation: "Fals: adresă URL suspectă (docs-google.net în loc de docs.google.com), presiune de timp.".to_string(),
                },
                Scenario {
                    category: "Fraudă bancară".to_string(),
                    real: ScenarioEmail {
                        subject: "Informare: Noi funcționalități în aplicația BancaX".to_string(),
                        body: "Stimată Doamnă/Stimate Domn,\n\nVă informăm că am actualizat aplicația mobilă cu noi funcționalități.\nPentru detalii, accesați aplicația sau www.banca-x.ro.\n\nBancaX".to_string(),
                    },
                    fake: ScenarioEmail {
                        subject: "URGENT: Cardul dvs. va fi blocat".to_string(),
                        body: "Stimat client,\n\nCardul dvs. va fi blocat în 24h din cauza unei activități suspecte.\nPentru verificare, accesați: http://banca-x.secureverify.com și introduceți datele cardului.\n\nDepartament Securitate".to_string(),
                    },
                    explanation: "Fals: domeniu fals (banca-x.secureverify.com), solicitare date card, ton de urgență.".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        catalog.validate().unwrap();
    }

    #[test]
    fn test_duplicate_categories_rejected() {
        let mut catalog = Catalog::builtin();
        let copy = catalog.scenarios[0].clone();
        catalog.scenarios.push(copy);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.scenarios[1].fake.body = "  ".to_string();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("fake body"));

        let mut catalog = Catalog::builtin();
        catalog.scenarios[0].category = String::new();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_json_contract_is_bare_array_with_type_key() {
        let value = serde_json::to_value(Catalog::builtin()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(
            array[0].get("type").and_then(|v| v.as_str()),
            Some("Email-phishing clasic")
        );
        assert!(array[0].get("real").is_some());
        assert!(array[0].get("fake").is_some());
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_messages_carry_category() {
        let catalog = Catalog::builtin();
        let fake = catalog.scenarios[2].fake_message();
        assert_eq!(fake.category.as_deref(), Some("Fraudă bancară"));
        assert_eq!(fake.subject, "URGENT: Cardul dvs. va fi blocat");
        let real = catalog.scenarios[2].real_message();
        assert_eq!(real.category.as_deref(), Some("Fraudă bancară"));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let catalog = Catalog::load_or_builtin("/nonexistent/catalog.json");
        assert_eq!(catalog, Catalog::builtin());
    }
}
