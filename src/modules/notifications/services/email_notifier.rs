/// Mock email delivery: the message is logged, never sent
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn send(&self, recipient: &str, message: &str) {
        tracing::info!("Email sent to {}: {}", recipient, message);
    }
}

impl Default for EmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}
