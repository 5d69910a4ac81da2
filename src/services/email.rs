//! Email service for verification and password reset codes

use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the code that confirms a registration
    pub async fn send_verification_code(&self, to: &str, code: &str, ttl_minutes: u64) -> AppResult<()> {
        let body = format!(
            "Your verification code is: {code}\n\n\
             It expires in {ttl_minutes} minutes. If you did not sign up, ignore this email.\n"
        );
        self.send_email(to, "Verify your account", body).await
    }

    /// Send the code that authorizes a password reset
    pub async fn send_reset_code(&self, to: &str, code: &str, ttl_minutes: u64) -> AppResult<()> {
        let body = format!(
            "Your password reset code is: {code}\n\n\
             It expires in {ttl_minutes} minutes. If you did not ask for a reset, ignore this email.\n"
        );
        self.send_email(to, "Reset your password", body).await
    }

    fn build_message(&self, to: &str, subject: &str, body: String) -> AppResult<Message> {
        let from_name = self
            .config
            .smtp_from_name
            .as_deref()
            .unwrap_or("Hotel Booking");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?;

        let to_mailbox = Mailbox::from_str(to)
            .map_err(|e| AppError::BadRequest(format!("Invalid to address: {}", e)))?;

        Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))
    }

    fn mailer(&self) -> AppResult<SmtpTransport> {
        let builder = if self.config.smtp_use_tls {
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Internal(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port);

        let builder = match (&self.config.smtp_username, &self.config.smtp_password) {
            (Some(username), Some(password)) => {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(builder.build())
    }

    async fn send_email(&self, to: &str, subject: &str, body: String) -> AppResult<()> {
        let email = self.build_message(to, subject, body)?;
        let mailer = self.mailer()?;

        // SmtpTransport blocks
        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::Internal(format!("Email task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Failed to send email: {}", e)))?;

        tracing::info!(to, subject, "email sent");
        Ok(())
    }
}
