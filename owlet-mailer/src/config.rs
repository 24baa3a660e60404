use crate::transports::TlsConfig;
use crate::{FileTransport, Mailer, MailerError, SmtpTransport};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Platform mail settings: the transport plus the fixed sender identity.
///
/// Sender addresses are configuration, never caller input; every email the
/// platform sends carries the same from and reply-to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub transport: TransportConfig,
    pub from_address: String,
    pub from_name: Option<String>,
    pub reply_to: Option<String>,
    /// Destination for contact form submissions.
    pub contact_inbox: String,
    pub app_name: String,
    pub app_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransportConfig {
    Smtp {
        host: String,
        port: Option<u16>,
        username: Option<String>,
        password: Option<String>,
        tls: Option<TlsType>,
    },
    File {
        output_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsType {
    None,
    StartTls,
    Tls,
}

impl From<TlsType> for TlsConfig {
    fn from(tls_type: TlsType) -> Self {
        match tls_type {
            TlsType::None => TlsConfig::None,
            TlsType::StartTls => TlsConfig::StartTls,
            TlsType::Tls => TlsConfig::Tls,
        }
    }
}

impl MailerConfig {
    /// Reads the mail configuration from the environment.
    ///
    /// `SMTP_HOST` selects the SMTP transport (`SMTP_PORT`, `SMTP_USER`,
    /// `SMTP_PASSWORD`, `SMTP_TLS` refine it); otherwise
    /// `MAILER_FILE_OUTPUT_DIR` selects the file transport. With neither set,
    /// mail lands in `./emails` so development works without a relay.
    /// Credentials are not checked here; a bad password surfaces per send as
    /// a transport error.
    pub fn from_env() -> Result<Self, MailerError> {
        let transport = if let Ok(host) = std::env::var("SMTP_HOST") {
            let port = match std::env::var("SMTP_PORT") {
                Ok(raw) => Some(raw.parse().map_err(|_| {
                    MailerError::Config(format!("invalid SMTP_PORT value: {raw}"))
                })?),
                Err(_) => None,
            };

            TransportConfig::Smtp {
                host,
                port,
                username: std::env::var("SMTP_USER").ok(),
                password: std::env::var("SMTP_PASSWORD").ok(),
                tls: std::env::var("SMTP_TLS").ok().and_then(|t| {
                    match t.to_lowercase().as_str() {
                        "none" => Some(TlsType::None),
                        "starttls" => Some(TlsType::StartTls),
                        "tls" => Some(TlsType::Tls),
                        _ => None,
                    }
                }),
            }
        } else if let Ok(output_dir) = std::env::var("MAILER_FILE_OUTPUT_DIR") {
            TransportConfig::File {
                output_dir: PathBuf::from(output_dir),
            }
        } else {
            // Default to file transport for development
            TransportConfig::File {
                output_dir: PathBuf::from("./emails"),
            }
        };

        let from_address = std::env::var("MAILER_FROM_ADDRESS")
            .unwrap_or_else(|_| "noreply@example.com".to_string());
        let contact_inbox =
            std::env::var("MAILER_CONTACT_INBOX").unwrap_or_else(|_| from_address.clone());

        Ok(Self {
            transport,
            from_address,
            from_name: std::env::var("MAILER_FROM_NAME").ok(),
            reply_to: std::env::var("MAILER_REPLY_TO").ok(),
            contact_inbox,
            app_name: std::env::var("MAILER_APP_NAME").unwrap_or_else(|_| "Owlet".to_string()),
            app_url: std::env::var("MAILER_APP_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }

    pub fn build_transport(&self) -> Result<Box<dyn Mailer>, MailerError> {
        match &self.transport {
            TransportConfig::Smtp {
                host,
                port,
                username,
                password,
                tls,
            } => {
                let mut builder = SmtpTransport::builder(host);

                if let Some(port) = port {
                    builder = builder.port(*port);
                }

                if let (Some(username), Some(password)) = (username, password) {
                    builder = builder.credentials(username, password);
                }

                // Unset means implicit TLS; lettre's relay then defaults the
                // port to 465.
                builder = builder.tls(tls.clone().map(Into::into).unwrap_or(TlsConfig::Tls));

                Ok(Box::new(builder.build()?))
            }
            TransportConfig::File { output_dir } => Ok(Box::new(FileTransport::new(output_dir)?)),
        }
    }

    pub fn get_from_address(&self) -> String {
        if let Some(name) = &self.from_name {
            format!("{} <{}>", name, self.from_address)
        } else {
            self.from_address.clone()
        }
    }
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::File {
                output_dir: PathBuf::from("./emails"),
            },
            from_address: "noreply@example.com".to_string(),
            from_name: None,
            reply_to: None,
            contact_inbox: "noreply@example.com".to_string(),
            app_name: "Owlet".to_string(),
            app_url: "http://localhost:3000".to_string(),
        }
    }
}
