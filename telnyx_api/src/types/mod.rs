mod meta;
pub use self::meta::{PageMeta, Response};

mod balance;
pub use self::balance::Balance;

mod conversation;
pub use self::conversation::Conversation;

mod mcp_server;
pub use self::mcp_server::McpServer;

mod media;
pub use self::media::Media;

mod message;
pub use self::message::{
    Cost, DeliveryStatus, Direction, Message, MessageEndpoint, MessageMedia, MessageType,
};

mod phone_number;
pub use self::phone_number::{PhoneNumber, PhoneNumberStatus};

mod transcription;
pub use self::transcription::{
    Transcription, TranscriptionFormat, TranscriptionModel, TranscriptionSegment,
};
