use crate::{
    client::Client,
    options::RequestOptions,
    params::{MediaListParams, MediaUploadParams},
    request::{parse, ApiRequest, Params},
    response::Binary,
    types::{Media, Response},
    Error,
};

pub struct MediaResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> MediaResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    pub async fn list(
        &self,
        params: impl Into<Params<MediaListParams>>,
    ) -> Result<Response<Vec<Media>>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::get("/media", &[])?.query(input);
        self.client.call(request).await
    }

    /// Uploads a file as multipart, or registers a URL as JSON.
    pub async fn upload(
        &self,
        params: impl Into<Params<MediaUploadParams>>,
    ) -> Result<Response<Media>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::post("/media", &[])?.form(input);
        self.client.call(request).await
    }

    pub async fn retrieve(&self, media_name: &str) -> Result<Response<Media>, Error> {
        let request = ApiRequest::get("/media/{media_name}", &[media_name])?.options(&self.options);
        self.client.call(request).await
    }

    /// Downloads the stored bytes as-is.
    pub async fn download(&self, media_name: &str) -> Result<Binary, Error> {
        let request = ApiRequest::get("/media/{media_name}/download", &[media_name])?
            .accept("*/*")
            .options(&self.options);
        self.client.call_binary(request).await
    }

    pub async fn delete(&self, media_name: &str) -> Result<(), Error> {
        let request =
            ApiRequest::delete("/media/{media_name}", &[media_name])?.options(&self.options);
        self.client.call_empty(request).await
    }
}
