use crate::{
    client::Client,
    options::RequestOptions,
    pagination::{Page, PageStyle},
    params::{McpServerCreateParams, McpServerListParams, McpServerUpdateParams},
    request::{parse, ApiRequest, Params},
    types::McpServer,
    Error,
};

pub struct McpServersResource<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> McpServersResource<'a> {
    pub(crate) fn new(client: &'a Client, options: RequestOptions) -> Self {
        Self { client, options }
    }

    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self::new(self.client, options)
    }

    pub async fn create(
        &self,
        params: impl Into<Params<McpServerCreateParams>>,
    ) -> Result<McpServer, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::post("/ai/mcp_servers", &[])?.json(input);
        self.client.call(request).await
    }

    /// Lists servers. The API returns a bare array per page, with no totals.
    pub async fn list(
        &self,
        params: impl Into<Params<McpServerListParams>>,
    ) -> Result<Page<McpServer>, Error> {
        let input = parse(params.into(), &self.options)?;
        let request = ApiRequest::get("/ai/mcp_servers", &[])?.query(input);
        self.client.call_page(request, PageStyle::Flat).await
    }

    pub async fn retrieve(&self, mcp_server_id: &str) -> Result<McpServer, Error> {
        let request = ApiRequest::get("/ai/mcp_servers/{mcp_server_id}", &[mcp_server_id])?
            .options(&self.options);
        self.client.call(request).await
    }

    pub async fn update(
        &self,
        mcp_server_id: &str,
        params: impl Into<Params<McpServerUpdateParams>>,
    ) -> Result<McpServer, Error> {
        let input = parse(params.into(), &self.options)?;
        let request =
            ApiRequest::put("/ai/mcp_servers/{mcp_server_id}", &[mcp_server_id])?.json(input);
        self.client.call(request).await
    }

    pub async fn delete(&self, mcp_server_id: &str) -> Result<(), Error> {
        let request = ApiRequest::delete("/ai/mcp_servers/{mcp_server_id}", &[mcp_server_id])?
            .options(&self.options);
        self.client.call_empty(request).await
    }
}
