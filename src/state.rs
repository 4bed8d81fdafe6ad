use std::sync::Arc;

use crate::auth::AccessTokenIssuer;
use crate::config::Config;
use crate::webhook::WebhookReceiver;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub issuer: Arc<AccessTokenIssuer>,
    pub webhook_receiver: Arc<WebhookReceiver>,
}

impl AppState {
    pub fn new(config: Config, issuer: AccessTokenIssuer, webhook_receiver: WebhookReceiver) -> Self {
        Self {
            config: Arc::new(config),
            issuer: Arc::new(issuer),
            webhook_receiver: Arc::new(webhook_receiver),
        }
    }

    /// Build every service from `config`
    pub fn from_config(config: Config) -> Self {
        let issuer = AccessTokenIssuer::new(&config);
        let webhook_receiver = WebhookReceiver::new(&config);
        Self::new(config, issuer, webhook_receiver)
    }
}
