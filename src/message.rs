use serde::{Deserialize, Serialize};

/// One candidate message under analysis. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EmailMessage {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        EmailMessage {
            subject: subject.into(),
            body: body.into(),
            sender: None,
            sender_address: None,
            category: None,
        }
    }

    /// Parse the plain-text form used by the CLI: optional `Subject:`,
    /// `From:` and `Category:` header lines, a blank line, then the body.
    /// Input without header lines is treated as body-only. Never fails;
    /// missing parts degrade to empty fields.
    pub fn from_plain_text(text: &str) -> Self {
        let mut message = EmailMessage::default();
        let mut body_lines: Vec<&str> = Vec::new();
        let mut in_headers = true;

        for line in text.lines() {
            if in_headers {
                if let Some(value) = header_value(line, "Subject:") {
                    message.subject = value.to_string();
                    continue;
                }
                if let Some(value) = header_value(line, "From:") {
                    Self::parse_from(&mut message, value);
                    continue;
                }
                if let Some(value) = header_value(line, "Category:") {
                    if !value.is_empty() {
                        message.category = Some(value.to_string());
                    }
                    continue;
                }
                in_headers = false;
                if line.trim().is_empty() {
                    continue;
                }
            }
            body_lines.push(line);
        }

        message.body = body_lines.join("\n");
        message
    }

    // "Name <addr@example.com>" or a bare address or a bare display name.
    fn parse_from(message: &mut EmailMessage, value: &str) {
        let value = value.trim();
        if let (Some(open), Some(close)) = (value.find('<'), value.rfind('>')) {
            if open < close {
                let name = value[..open].trim();
                if !name.is_empty() {
                    message.sender = Some(name.to_string());
                }
                let address = value[open + 1..close].trim();
                if !address.is_empty() {
                    message.sender_address = Some(address.to_string());
                }
                return;
            }
        }
        if value.is_empty() {
            return;
        }
        if value.contains('@') {
            message.sender_address = Some(value.to_string());
        } else {
            message.sender = Some(value.to_string());
        }
    }
}

// ASCII case-insensitive header prefix match that never slices mid-character.
fn header_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let prefix = line.get(..name.len())?;
    if prefix.eq_ignore_ascii_case(name) {
        Some(line[name.len()..].trim())
    } else {
        None
    }
}
