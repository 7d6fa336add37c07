use crate::{
    client::Client,
    options::RequestOptions,
    pagination::{Page, PageStyle},
    params::{PhoneNumberListParams, PhoneNumberUpdateParams},
    request::{parse, ApiRequest, Params},
    types::{PhoneNumber, Response},
    Error,
};

pub struct PhoneNumbersResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> PhoneNumbersResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    /// Lists numbers page by page. The result carries offset metadata.
    pub async fn list(
        &self,
        params: impl Into<Params<PhoneNumberListParams>>,
    ) -> Result<Page<PhoneNumber>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::get("/phone_numbers", &[])?.query(input);
        self.client.call_page(request, PageStyle::Offset).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Response<PhoneNumber>, Error> {
        let request = ApiRequest::get("/phone_numbers/{id}", &[id])?.options(&self.options);
        self.client.call(request).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: impl Into<Params<PhoneNumberUpdateParams>>,
    ) -> Result<Response<PhoneNumber>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::patch("/phone_numbers/{id}", &[id])?.json(input);
        self.client.call(request).await
    }

    /// Releases the number. The response is the number's final state.
    pub async fn delete(&self, id: &str) -> Result<Response<PhoneNumber>, Error> {
        let request = ApiRequest::delete("/phone_numbers/{id}", &[id])?.options(&self.options);
        self.client.call(request).await
    }
}
