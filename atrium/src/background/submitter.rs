use std::sync::Arc;

use tokio::sync::mpsc;

use crate::events::DataEvent;

/// Runs auth calls off the event loop and reports outcomes as
/// DataEvents. Holds the API client and the sending half of the event
/// channel; the event loop owns the receiving half.
pub struct AuthSubmitter {
    client: Arc<atrium_api::Client>,
    event_tx: mpsc::UnboundedSender<DataEvent>,
}

impl AuthSubmitter {
    pub fn new(client: Arc<atrium_api::Client>, event_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { client, event_tx }
    }

    pub async fn submit_register(&self, email: String, username: String, password: String) {
        let event = match self.client.register(&email, &username, &password).await {
            Ok(response) => DataEvent::RegisterSucceeded {
                message: response.message,
            },
            Err(error) => {
                tracing::error!("Registration failed for {}: {}", username, error);
                DataEvent::RegisterFailed {
                    error: error.display_message(),
                }
            }
        };
        self.send(event);
    }

    pub async fn submit_login(&self, username: String, password: String) {
        let event = match self.client.login(&username, &password).await {
            Ok(response) => DataEvent::LoginSucceeded {
                username: response.username,
                full_name: response.full_name,
            },
            Err(error) => {
                tracing::error!("Login failed for {}: {}", username, error);
                DataEvent::LoginFailed {
                    error: error.display_message(),
                }
            }
        };
        self.send(event);
    }

    fn send(&self, event: DataEvent) {
        // The receiver only drops during shutdown; a late outcome is
        // then irrelevant.
        if let Err(e) = self.event_tx.send(event) {
            tracing::debug!("Dropping auth outcome, event loop gone: {}", e);
        }
    }
}
