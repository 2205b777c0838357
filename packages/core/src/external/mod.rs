//! External Collaborators
//!
//! Call contracts for services the core invokes but does not implement:
//! mail delivery and spam checking. Both are best-effort side effects,
//! invoked only after the core's own state change commits, and both take
//! explicit configuration structs at construction, with no ambient process
//! state.

mod mailer;
mod spam;

pub use mailer::{Mailer, MailerConfig, NullMailer};
pub use spam::{SpamChecker, SpamConfig, SpamVerdict, StaticSpamChecker};
