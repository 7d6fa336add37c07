//! One service handle per API resource.
//!
//! Handles borrow the [`crate::Client`] and carry the [`crate::RequestOptions`]
//! for their calls. `with_options` returns a new handle and leaves the client
//! and the original handle untouched.

mod ai;
mod balance;
mod media;
mod messages;
mod phone_numbers;

pub use self::ai::{AiResource, AudioResource, ConversationsResource, McpServersResource};
pub use self::balance::BalanceResource;
pub use self::media::MediaResource;
pub use self::messages::MessagesResource;
pub use self::phone_numbers::PhoneNumbersResource;
