use crate::{
    client::Client,
    options::RequestOptions,
    params::SendMessageParams,
    request::{parse, ApiRequest, Params},
    types::{Message, Response},
    Error,
};

pub struct MessagesResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> MessagesResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    /// Sends an SMS or MMS. The message comes back queued.
    pub async fn send(
        &self,
        params: impl Into<Params<SendMessageParams>>,
    ) -> Result<Response<Message>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::post("/messages", &[])?.json(input);
        self.client.call(request).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Response<Message>, Error> {
        let request = ApiRequest::get("/messages/{id}", &[id])?.options(&self.options);
        self.client.call(request).await
    }
}
