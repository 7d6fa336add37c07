use crate::{
    client::Client,
    options::RequestOptions,
    request::ApiRequest,
    types::{Balance, Response},
    Error,
};

pub struct BalanceResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> BalanceResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    /// Fetches the account balance.
    pub async fn retrieve(&self) -> Result<Response<Balance>, Error> {
        let request = ApiRequest::get("/balance", &[])?.options(&self.options);
        self.client.call(request).await
    }
}
