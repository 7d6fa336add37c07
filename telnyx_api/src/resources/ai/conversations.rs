use crate::{
    client::Client,
    options::RequestOptions,
    params::{ConversationCreateParams, ConversationListParams, ConversationUpdateParams},
    request::{parse, ApiRequest, Params},
    types::{Conversation, Response},
    Error,
};

pub struct ConversationsResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> ConversationsResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    pub async fn create(
        &self,
        params: impl Into<Params<ConversationCreateParams>>,
    ) -> Result<Conversation, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::post("/ai/conversations", &[])?.json(input);
        self.client.call(request).await
    }

    /// Lists conversations matching PostgREST-style filters.
    pub async fn list(
        &self,
        params: impl Into<Params<ConversationListParams>>,
    ) -> Result<Response<Vec<Conversation>>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::get("/ai/conversations", &[])?.query(input);
        self.client.call(request).await
    }

    pub async fn retrieve(&self, conversation_id: &str) -> Result<Response<Conversation>, Error> {
        let request = ApiRequest::get("/ai/conversations/{conversation_id}", &[conversation_id])?
            .options(&self.options);
        self.client.call(request).await
    }

    pub async fn update(
        &self,
        conversation_id: &str,
        params: impl Into<Params<ConversationUpdateParams>>,
    ) -> Result<Response<Conversation>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request =
            ApiRequest::put("/ai/conversations/{conversation_id}", &[conversation_id])?
                .json(input);
        self.client.call(request).await
    }

    /// The delete payload has no declared schema and is returned as-is.
    pub async fn delete(&self, conversation_id: &str) -> Result<serde_json::Value, Error> {
        let request =
            ApiRequest::delete("/ai/conversations/{conversation_id}", &[conversation_id])?
                .options(&self.options);
        self.client.call(request).await
    }
}
