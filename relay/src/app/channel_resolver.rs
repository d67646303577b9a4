//! Channel resolver
//!
//! Picks the destination channels of a pass out of everything the chat
//! session knows about.

use crate::domain::entities::Channel;
use crate::domain::ports::ChatPlatform;

/// Channels with a usable feed topic, in the session's discovery order.
/// Channels without one are skipped silently.
pub fn list_eligible_channels<C: ChatPlatform + ?Sized>(chat: &C) -> Vec<Channel> {
    chat.text_channels()
        .into_iter()
        .filter(Channel::is_eligible)
        .collect()
}
