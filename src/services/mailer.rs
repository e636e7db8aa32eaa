// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SMTP mailer for contact-form notifications.
//!
//! Mail is addressed from and to the service's own mailbox; the visitor's
//! address only appears in the body so replies can be sent manually.

use crate::error::AppError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// SMTP mail transport wrapper.
#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    mailbox: String,
}

impl Mailer {
    /// Create a mailer over an authenticated TLS relay.
    pub fn new(smtp_host: &str, email: &str, password: &str) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_host)
            .map_err(|e| AppError::Mail(format!("Failed to build SMTP transport: {}", e)))?
            .credentials(Credentials::new(email.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport: Some(transport),
            mailbox: email.to_string(),
        })
    }

    /// Create a mock mailer for testing (offline mode).
    ///
    /// All sends will return an error.
    pub fn new_mock() -> Self {
        Self {
            transport: None,
            mailbox: "fitlog@example.com".to_string(),
        }
    }

    /// Send a contact notification to the service mailbox.
    pub async fn send(
        &self,
        sender_name: &str,
        sender_email: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), AppError> {
        let transport = self.transport.as_ref().ok_or_else(|| {
            AppError::Mail("Mail transport not configured (offline mode)".to_string())
        })?;

        let mailbox: Mailbox = self
            .mailbox
            .parse()
            .map_err(|e| AppError::Mail(format!("Invalid service mailbox: {}", e)))?;

        let email = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(compose_body(sender_name, sender_email, message))
            .map_err(|e| AppError::Mail(format!("Failed to build message: {}", e)))?;

        transport
            .send(email)
            .await
            .map_err(|e| AppError::Mail(e.to_string()))?;

        Ok(())
    }
}

/// Fixed HTML template for contact notifications.
fn compose_body(sender_name: &str, sender_email: &str, message: &str) -> String {
    format!(
        "Name: {}<br/> Message: {}<br/>Respond to: {}",
        sender_name, message, sender_email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_body_template() {
        let body = compose_body("Ada", "ada@example.com", "Hi there");
        assert_eq!(
            body,
            "Name: Ada<br/> Message: Hi there<br/>Respond to: ada@example.com"
        );
    }

    #[tokio::test]
    async fn test_mock_mailer_send_fails() {
        let mailer = Mailer::new_mock();
        let result = mailer.send("Ada", "ada@example.com", "Subject", "Body").await;
        assert!(matches!(result, Err(AppError::Mail(_))));
    }
}
