use crate::error::{CatalogError, Result};
use std::fmt::Write;

/// Address enquiries are sent to when no other recipient is given.
pub const DEFAULT_RECIPIENT: &str = "info@luvora.com";

/// A visitor enquiry from the contact form. `phone` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Rejects the message when any required field is blank.
    pub fn validate(&self) -> Result<()> {
        let required = [&self.name, &self.email, &self.subject, &self.message];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(CatalogError::ValidationError(
                "Please fill in all required fields.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            self.name, self.email, self.phone, self.message
        )
    }

    /// Validates the message and composes a `mailto:` link addressed to `to`.
    pub fn mailto_link(&self, to: &str) -> Result<String> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body())
        ))
    }
}

/// Percent-encodes `input` with the same unreserved set as JavaScript's
/// `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
