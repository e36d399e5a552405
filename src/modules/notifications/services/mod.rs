pub mod email_notifier;

pub use email_notifier::EmailNotifier;
