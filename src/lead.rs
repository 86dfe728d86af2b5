use thiserror::Error;

use crate::config;

const MIN_PHONE_DIGITS: usize = 8;
const MAX_PHONE_DIGITS: usize = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interest {
    #[default]
    Buy,
    TradeIn,
    Question,
}

impl Interest {
    pub const ALL: [Interest; 3] = [Interest::Buy, Interest::TradeIn, Interest::Question];

    pub fn key(self) -> &'static str {
        match self {
            Interest::Buy => "buy",
            Interest::TradeIn => "trade-in",
            Interest::Question => "question",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Buy => "Quiero comprar un equipo",
            Interest::TradeIn => "Quiero cotizar mi usado",
            Interest::Question => "Tengo una consulta",
        }
    }
}

/// Raw form input, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub interest: Interest,
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub interest: Interest,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("Ingresá tu nombre")]
    MissingName,
    #[error("Ingresá un teléfono válido (entre {} y {} dígitos)", MIN_PHONE_DIGITS, MAX_PHONE_DIGITS)]
    InvalidPhone,
}

/// Keeps the digits of a phone number, plus a leading `+` if present.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if trimmed.starts_with('+') {
        format!("+{}", digits)
    } else {
        digits
    }
}

pub fn validate(form: &LeadForm) -> Result<Lead, LeadError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(LeadError::MissingName);
    }

    let phone = normalize_phone(&form.phone);
    let digit_count = phone.trim_start_matches('+').len();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digit_count) {
        return Err(LeadError::InvalidPhone);
    }

    Ok(Lead {
        name: name.to_string(),
        phone,
        interest: form.interest,
    })
}

pub fn message(lead: &Lead) -> String {
    format!(
        "Hola {} {}! Soy {} ({}). {}.",
        config::STORE_NAME,
        config::STORE_TOWN,
        lead.name,
        lead.phone,
        lead.interest.label()
    )
}

/// WhatsApp click-to-chat link carrying the lead as a prefilled message.
pub fn whatsapp_link(lead: &Lead) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(&message(lead))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, phone: &str) -> LeadForm {
        LeadForm {
            name: name.to_string(),
            phone: phone.to_string(),
            interest: Interest::TradeIn,
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(validate(&form("   ", "3455 123456")), Err(LeadError::MissingName));
    }

    #[test]
    fn short_phone_is_rejected() {
        assert_eq!(validate(&form("Ana", "12-34")), Err(LeadError::InvalidPhone));
        assert_eq!(validate(&form("Ana", "")), Err(LeadError::InvalidPhone));
    }

    #[test]
    fn overlong_phone_is_rejected() {
        assert_eq!(
            validate(&form("Ana", "1234567890123456")),
            Err(LeadError::InvalidPhone)
        );
    }

    #[test]
    fn phone_formatting_is_stripped() {
        let lead = validate(&form("  Ana Pérez ", "+54 (345) 512-3456")).unwrap();
        assert_eq!(lead.name, "Ana Pérez");
        assert_eq!(lead.phone, "+543455123456");
        assert_eq!(lead.interest, Interest::TradeIn);
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        let lead = validate(&form("Ana", "3455123456")).unwrap();
        let link = whatsapp_link(&lead);
        assert!(link.starts_with(&format!("https://wa.me/{}?text=", config::WHATSAPP_NUMBER)));
        let text = link.split_once("?text=").unwrap().1;
        assert!(!text.contains(' '));
        assert_eq!(urlencoding::decode(text).unwrap(), message(&lead));
    }

    #[test]
    fn interest_keys_round_trip() {
        for interest in Interest::ALL {
            assert_eq!(Interest::from_key(interest.key()), Some(interest));
        }
        assert_eq!(Interest::from_key("other"), None);
    }

    #[test]
    fn error_messages_mention_limits() {
        assert!(LeadError::InvalidPhone.to_string().contains("8"));
        assert_eq!(LeadError::MissingName.to_string(), "Ingresá tu nombre");
    }
}
