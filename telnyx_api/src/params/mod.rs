mod common;
pub use self::common::{PageParams, Paginate, MAX_PAGE_SIZE};

mod conversation;
pub use self::conversation::{
    filter, ConversationCreateParams, ConversationListParams, ConversationUpdateParams,
};

mod mcp_server;
pub use self::mcp_server::{McpServerCreateParams, McpServerListParams, McpServerUpdateParams};

mod media;
pub use self::media::{MediaFilter, MediaListParams, MediaUploadParams};

mod message;
pub use self::message::SendMessageParams;

mod phone_number;
pub use self::phone_number::{
    PhoneNumberFilter, PhoneNumberListParams, PhoneNumberSort, PhoneNumberUpdateParams,
};

mod transcription;
pub use self::transcription::TranscriptionParams;
