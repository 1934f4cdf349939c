use secrecy::SecretString;
use serde::Deserialize;

/// Keys for the payment processor. The shipped client is a stub that
/// fabricates identifiers; the keys are carried so a real integration can
/// be dropped in without touching the config surface.
#[derive(Debug, Deserialize, Clone)]
pub struct StripeSettings {
    pub publishable_key: String,
    pub secret_key: SecretString,
    pub webhook_secret: SecretString,
}
