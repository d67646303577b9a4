//! Domain entities
//!
//! Pure domain models representing the channels, feed items and messages
//! the distribution pipeline works with.

pub mod channel;
pub mod message;
pub mod submission;

pub use channel::{Channel, ChannelId};
pub use message::{
    truncate, Embed, OutgoingMessage, EMBED_TITLE_LIMIT, MAX_EMBEDS_PER_MESSAGE,
    MESSAGE_CONTENT_LIMIT,
};
pub use submission::{classify, Submission, SubmissionType};
