mod stripe;

pub use stripe::{PaymentProcessor, StripeClient};
