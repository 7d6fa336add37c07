mod audio;
mod conversations;
mod mcp_servers;

pub use self::audio::AudioResource;
pub use self::conversations::ConversationsResource;
pub use self::mcp_servers::McpServersResource;

use crate::{client::Client, options::RequestOptions};

/// Groups the `/ai` endpoints.
pub struct AiResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> AiResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    /// Options set here carry over to every sub-resource.
    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    pub fn mcp_servers(&self) -> McpServersResource<'a> {
        McpServersResource::new(self.client, self.options.clone())
    }

    pub fn conversations(&self) -> ConversationsResource<'a> {
        ConversationsResource::new(self.client, self.options.clone())
    }

    pub fn audio(&self) -> AudioResource<'a> {
        AudioResource::new(self.client, self.options.clone())
    }
}
