//! The contact form: what has to be filled in, and what gets sent to the relay

#[cfg(test)]
mod test;

/// Subject line the relay puts on the forwarded mail
pub const CONTACT_SUBJECT: &str = "New message from the LanguageClub website";

/// The raw input, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormError {
    MissingName,
    MissingEmail,
    /// Something was entered but it cannot be an address
    MalformedEmail,
    MissingMessage,
}
impl core::fmt::Display for ContactFormError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::MissingName => write!(f, "Please enter your name."),
            Self::MissingEmail => write!(f, "Please enter your email address."),
            Self::MalformedEmail => write!(f, "Please enter a valid email address."),
            Self::MissingMessage => write!(f, "Please enter a message."),
        }
    }
}
impl std::error::Error for ContactFormError {}

/// A form that passed validation, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ValidContact, ContactFormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactFormError::MalformedEmail);
        }
        if message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(ValidContact {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl ValidContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The multipart fields the relay expects, in order
    pub fn relay_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("message", self.message.clone()),
            ("_subject", CONTACT_SUBJECT.to_string()),
            ("_captcha", "false".to_string()),
            ("_template", "table".to_string()),
        ]
    }
}

/// `local@domain.tld`, no whitespace. The relay does the real checking.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
