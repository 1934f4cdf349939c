use crate::config::stripe::StripeSettings;
use crate::models::payment::{Payment, PaymentIntent};

/// External payment-processor seam. The production integration would talk
/// to Stripe; the shipped client fabricates identifiers so the rest of the
/// payment flow can be exercised end to end.
pub trait PaymentProcessor {
    fn create_payment_intent(&self, payment: &Payment) -> PaymentIntent;
}

pub struct StripeClient {
    #[allow(dead_code)]
    settings: StripeSettings,
}

impl StripeClient {
    pub fn new(settings: StripeSettings) -> Self {
        Self { settings }
    }
}

impl PaymentProcessor for StripeClient {
    fn create_payment_intent(&self, payment: &Payment) -> PaymentIntent {
        // Stub: no outbound call, identifiers are fabricated from the row id
        PaymentIntent {
            id: format!("pi_test_{}", payment.id.simple()),
            client_secret: format!("pi_test_{}_secret_test", payment.id.simple()),
            status: "requires_payment_method".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use secrecy::SecretString;
    use uuid::Uuid;

    use crate::models::payment::PaymentStatus;

    fn stub_client() -> StripeClient {
        StripeClient::new(StripeSettings {
            publishable_key: "pk_test".to_string(),
            secret_key: SecretString::new("sk_test".to_string().into_boxed_str()),
            webhook_secret: SecretString::new("whsec_test".to_string().into_boxed_str()),
        })
    }

    fn payment() -> Payment {
        let now = Utc::now();
        Payment {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            trainer_id: Uuid::new_v4(),
            amount: 7500,
            currency: "USD".to_string(),
            description: None,
            stripe_payment_intent_id: None,
            stripe_charge_id: None,
            stripe_customer_id: None,
            status: PaymentStatus::Pending,
            payment_method: None,
            paid_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn fabricated_intent_carries_the_payment_id() {
        let payment = payment();
        let intent = stub_client().create_payment_intent(&payment);
        assert!(intent.id.contains(&payment.id.simple().to_string()));
        assert!(intent.client_secret.ends_with("_secret_test"));
        assert_eq!(intent.status, "requires_payment_method");
    }
}
