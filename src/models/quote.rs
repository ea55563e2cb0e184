use serde::{Deserialize, Serialize};

/// One of the five fields on the quote form, keyed by its HTML `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl QuoteField {
    pub const ALL: [QuoteField; 5] = [
        QuoteField::Name,
        QuoteField::Email,
        QuoteField::Phone,
        QuoteField::Service,
        QuoteField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteField::Name => "name",
            QuoteField::Email => "email",
            QuoteField::Phone => "phone",
            QuoteField::Service => "service",
            QuoteField::Message => "message",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for QuoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Fence,
    Deck,
    Interior,
    Multiple,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Fence,
        ServiceKind::Deck,
        ServiceKind::Interior,
        ServiceKind::Multiple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Fence => "fence",
            ServiceKind::Deck => "deck",
            ServiceKind::Interior => "interior",
            ServiceKind::Multiple => "multiple",
        }
    }

    /// Label shown in the service `<select>`.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Fence => "Fence Painting/Staining",
            ServiceKind::Deck => "Deck Staining/Sealing",
            ServiceKind::Interior => "Interior Painting",
            ServiceKind::Multiple => "Multiple Services",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("{0} is required")]
    MissingField(QuoteField),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("unknown service: {0}")]
    UnknownService(String),
}

/// In-progress state of the quote form. Both form instances on the page
/// edit the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl QuoteForm {
    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::Service => &self.service,
            QuoteField::Message => &self.message,
        }
    }

    /// Returns a copy of the form with `field_name` replaced by `value`.
    /// Every other field keeps its current value.
    pub fn update_field(&self, field_name: &str, value: &str) -> Result<QuoteForm, QuoteError> {
        let field = QuoteField::parse(field_name)
            .ok_or_else(|| QuoteError::UnknownField(field_name.to_string()))?;
        Ok(self.with(field, value))
    }

    pub fn with(&self, field: QuoteField, value: &str) -> QuoteForm {
        let mut next = self.clone();
        let slot = match field {
            QuoteField::Name => &mut next.name,
            QuoteField::Email => &mut next.email,
            QuoteField::Phone => &mut next.phone,
            QuoteField::Service => &mut next.service,
            QuoteField::Message => &mut next.message,
        };
        *slot = value.to_string();
        next
    }

    /// Applies the same checks a browser runs before letting the form post:
    /// every field present, a syntactically valid email, and a known service.
    pub fn submit(&self) -> Result<QuoteRequest, QuoteError> {
        if let Some(missing) = QuoteField::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            return Err(QuoteError::MissingField(missing));
        }

        if !is_valid_email(&self.email) {
            return Err(QuoteError::InvalidEmail(self.email.clone()));
        }

        let service = ServiceKind::parse(&self.service)
            .ok_or_else(|| QuoteError::UnknownService(self.service.clone()))?;

        Ok(QuoteRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service,
            message: self.message.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    pub message: String,
}

const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// The "valid e-mail address" grammar browsers use for `<input type="email">`.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
    {
        return false;
    }

    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
