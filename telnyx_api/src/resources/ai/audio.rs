use crate::{
    client::Client,
    options::RequestOptions,
    params::TranscriptionParams,
    request::{parse, ApiRequest, Params},
    types::Transcription,
    Error,
};

pub struct AudioResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> AudioResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    /// Transcribes an uploaded file or a remote URL.
    pub async fn transcribe(
        &self,
        params: impl Into<Params<TranscriptionParams>>,
    ) -> Result<Transcription, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::post("/ai/audio/transcriptions", &[])?.multipart(input);
        self.client.call(request).await
    }
}
