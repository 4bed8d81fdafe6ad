pub mod claims;
pub mod token;
pub mod webhook;

pub use claims::{Claims, VideoGrants};
pub use token::{TokenRequest, TokenResponse};
pub use webhook::WebhookEvent;
