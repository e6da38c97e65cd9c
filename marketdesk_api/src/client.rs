//! HTTP client for the marketplace admin REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    payload::ProductPayload,
    query::{
        EnquiryQuery, OrderQuery, ProductQuery, Query, ReturnRequestQuery, ReviewsQuery,
        TransactionQuery, UserOrdersQuery, UserProductsQuery, UserQuery,
    },
    types::{
        Brand, Category, Color, Condition, ContactEnquiry, DashboardStats, Envelope, EnquiryReply,
        ListEnvelope, Material, Order, Product, ReturnRequest, Review, Size, SubCategory,
        TrustapAccount, TrustapTransaction, User, UserUpdate, WalletHistory,
    },
    Error,
};

/// HTTP client for the admin backend.
///
/// Stateless apart from the configured base URL and the bearer token, which
/// is attached to every request when present. A 401/403 response surfaces
/// as [`Error::Unauthorized`] so the session layer can force a logout.
pub struct Client {
    base_api_url: String,
    token: Option<String>,
}

impl Client {
    /// Creates a new client pointing at the given backend base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Alias of [`Client::new`] kept for parity with test call sites that
    /// point the client at a wiremock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(base_url)
    }

    /// Attaches a bearer token used on every subsequent request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn get_url<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn http(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport
            })
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .authorize(builder)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                Error::Transport
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport
        })?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            tracing::warn!("Request rejected with status {}", status);
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let message = extract_message(&body)
                .unwrap_or_else(|| truncate_body(&body));
            tracing::error!("Request failed with status {}: {}", status, message);
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::Decode
        })?;

        Ok(parsed)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        self.execute(self.http()?.get(url)).await
    }

    async fn get_plain<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get::<T, UserQuery>(path, None).await
    }

    // ---- Users ----

    /// Fetches a paginated page of users matching the given query.
    pub async fn get_users(&self, query: &UserQuery) -> Result<ListEnvelope<User>, Error> {
        self.get("/v2/user", Some(query)).await
    }

    /// Fetches a single user's profile.
    pub async fn get_user(&self, user_id: i64) -> Result<Envelope<User>, Error> {
        self.get_plain(format!("/v2/user/user-info?user_id={}", user_id).as_str())
            .await
    }

    /// Applies a partial update to a user. Unset fields are not sent.
    pub async fn update_user(
        &self,
        user_id: i64,
        update: &UserUpdate,
    ) -> Result<Envelope<User>, Error> {
        let url = self.get_url::<UserQuery>(format!("/v2/user/{}", user_id).as_str(), None)?;
        self.execute(self.http()?.patch(url).json(update)).await
    }

    /// Fetches one page of a user's product listings.
    pub async fn get_user_products(
        &self,
        user_id: i64,
        query: &UserProductsQuery,
    ) -> Result<ListEnvelope<Product>, Error> {
        self.get(format!("/v2/user/{}/products", user_id).as_str(), Some(query))
            .await
    }

    /// Fetches one page of a user's orders.
    pub async fn get_user_orders(
        &self,
        user_id: i64,
        query: &UserOrdersQuery,
    ) -> Result<ListEnvelope<Order>, Error> {
        self.get(format!("/v2/user/{}/orders", user_id).as_str(), Some(query))
            .await
    }

    /// Fetches a user's complete wallet history. This endpoint returns the
    /// full set in one response; callers page it locally.
    pub async fn get_user_transactions(&self, user_id: i64) -> Result<WalletHistory, Error> {
        self.get_plain(format!("/v2/user/{}/transactions", user_id).as_str())
            .await
    }

    /// Fetches a user's escrow account summary.
    pub async fn get_user_trustap_info(
        &self,
        user_id: i64,
    ) -> Result<Envelope<TrustapAccount>, Error> {
        self.get_plain(format!("/v2/user/{}/trustap", user_id).as_str())
            .await
    }

    /// Fetches one page of the reviews a user has received.
    pub async fn get_user_reviews_received(
        &self,
        user_id: i64,
        query: &ReviewsQuery,
    ) -> Result<ListEnvelope<Review>, Error> {
        self.get(
            format!("/v2/user/{}/reviews/received", user_id).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches one page of the reviews a user has written.
    pub async fn get_user_reviews_given(
        &self,
        user_id: i64,
        query: &ReviewsQuery,
    ) -> Result<ListEnvelope<Review>, Error> {
        self.get(
            format!("/v2/user/{}/reviews/given", user_id).as_str(),
            Some(query),
        )
        .await
    }

    // ---- Products ----

    /// Fetches a paginated page of the product catalogue.
    pub async fn get_products(&self, query: &ProductQuery) -> Result<ListEnvelope<Product>, Error> {
        self.get("/v2/product/all", Some(query)).await
    }

    /// Fetches a single product by id.
    pub async fn get_product(&self, product_id: i64) -> Result<Envelope<Product>, Error> {
        self.get_plain(format!("/v2/product/{}", product_id).as_str())
            .await
    }

    /// Creates a product on behalf of a user (multipart, supports image
    /// attachments). This is the endpoint bulk upload drives one call at a
    /// time.
    pub async fn create_product(&self, payload: ProductPayload) -> Result<Envelope<Product>, Error> {
        let url = self.get_url::<UserQuery>("/v2/product/admin/add", None)?;
        self.execute(self.http()?.post(url).multipart(payload.into_form()))
            .await
    }

    /// Replaces a product's editable fields (multipart).
    pub async fn update_product(
        &self,
        product_id: i64,
        payload: ProductPayload,
    ) -> Result<Envelope<Product>, Error> {
        let url = self.get_url::<UserQuery>(format!("/v2/product/{}", product_id).as_str(), None)?;
        self.execute(self.http()?.put(url).multipart(payload.into_form()))
            .await
    }

    /// Deletes a product.
    pub async fn delete_product(&self, product_id: i64) -> Result<Envelope<Product>, Error> {
        let url = self.get_url::<UserQuery>(format!("/v2/product?id={}", product_id).as_str(), None)?;
        self.execute(self.http()?.delete(url)).await
    }

    // ---- Orders ----

    /// Fetches a paginated page of orders matching the given query.
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<ListEnvelope<Order>, Error> {
        self.get("/v2/order", Some(query)).await
    }

    /// Fetches a single order with its tracking block.
    pub async fn get_order(&self, order_id: i64) -> Result<Envelope<Order>, Error> {
        self.get_plain(format!("/v2/order/{}", order_id).as_str())
            .await
    }

    // ---- Return requests ----

    /// Fetches a paginated page of return requests.
    pub async fn get_return_requests(
        &self,
        query: &ReturnRequestQuery,
    ) -> Result<ListEnvelope<ReturnRequest>, Error> {
        self.get("/v2/chat/return-request", Some(query)).await
    }

    /// Fetches a single return request.
    pub async fn get_return_request(
        &self,
        return_request_id: i64,
    ) -> Result<Envelope<ReturnRequest>, Error> {
        self.get_plain(format!("/v2/chat/return-request/{}", return_request_id).as_str())
            .await
    }

    /// Approves the return request attached to the given order. The
    /// approval rules themselves live server-side.
    pub async fn approve_return_request(
        &self,
        order_id: i64,
    ) -> Result<Envelope<ReturnRequest>, Error> {
        let url = self.get_url::<UserQuery>(
            format!("/v2/chat/approve-return-request/{}", order_id).as_str(),
            None,
        )?;
        self.execute(self.http()?.post(url)).await
    }

    /// Rejects the return request attached to the given order.
    pub async fn reject_return_request(
        &self,
        order_id: i64,
    ) -> Result<Envelope<ReturnRequest>, Error> {
        let url = self.get_url::<UserQuery>(
            format!("/v2/chat/reject-return-request/{}", order_id).as_str(),
            None,
        )?;
        self.execute(self.http()?.post(url)).await
    }

    // ---- Contact enquiries ----

    /// Fetches a paginated page of contact enquiries.
    pub async fn get_enquiries(
        &self,
        query: &EnquiryQuery,
    ) -> Result<ListEnvelope<ContactEnquiry>, Error> {
        self.get("/v2/support/contact-enquiries", Some(query)).await
    }

    /// Fetches a single contact enquiry.
    pub async fn get_enquiry(&self, enquiry_id: i64) -> Result<Envelope<ContactEnquiry>, Error> {
        self.get_plain(format!("/v2/support/contact-enquiries/{}", enquiry_id).as_str())
            .await
    }

    /// Sends a staff reply to an enquiry.
    pub async fn reply_to_enquiry(
        &self,
        enquiry_id: i64,
        reply: &EnquiryReply,
    ) -> Result<Envelope<ContactEnquiry>, Error> {
        let url = self.get_url::<UserQuery>(
            format!("/v2/support/contact-enquiries/{}/reply", enquiry_id).as_str(),
            None,
        )?;
        self.execute(self.http()?.post(url).json(reply)).await
    }

    // ---- Transactions, stats, master data ----

    /// Fetches a paginated page of escrow-provider transactions.
    pub async fn get_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<ListEnvelope<TrustapTransaction>, Error> {
        self.get("/v2/trustap-transactions", Some(query)).await
    }

    /// Fetches the dashboard headline counters.
    pub async fn get_dashboard_stats(&self) -> Result<Envelope<DashboardStats>, Error> {
        self.get_plain("/v2/dashboard/stats").await
    }

    pub async fn get_categories(&self) -> Result<ListEnvelope<Category>, Error> {
        self.get_plain("/v2/master/categories").await
    }

    pub async fn get_sub_categories(
        &self,
        category_id: i64,
    ) -> Result<ListEnvelope<SubCategory>, Error> {
        self.get_plain(format!("/v2/master/sub-categories?category_id={}", category_id).as_str())
            .await
    }

    /// Fetches brands, optionally narrowed by search text and sub-category.
    pub async fn get_brands(
        &self,
        search: &str,
        sub_category_id: Option<i64>,
    ) -> Result<ListEnvelope<Brand>, Error> {
        let mut url = self.get_url::<UserQuery>("/v2/master/brands", None)?;
        if !search.is_empty() {
            url.query_pairs_mut().append_pair("search", search);
        }
        if let Some(sub_category_id) = sub_category_id {
            url.query_pairs_mut()
                .append_pair("sub_category_id", &sub_category_id.to_string());
        }
        self.execute(self.http()?.get(url)).await
    }

    pub async fn get_sizes(&self, category_id: Option<i64>) -> Result<ListEnvelope<Size>, Error> {
        let mut url = self.get_url::<UserQuery>("/v2/master/sizes", None)?;
        if let Some(category_id) = category_id {
            url.query_pairs_mut()
                .append_pair("category_id", &category_id.to_string());
        }
        self.execute(self.http()?.get(url)).await
    }

    pub async fn get_colors(&self) -> Result<ListEnvelope<Color>, Error> {
        self.get_plain("/v2/master/colors").await
    }

    pub async fn get_materials(&self) -> Result<ListEnvelope<Material>, Error> {
        self.get_plain("/v2/master/materials").await
    }

    pub async fn get_conditions(&self) -> Result<ListEnvelope<Condition>, Error> {
        self.get_plain("/v2/master/conditions").await
    }
}

/// Pulls the backend's human-readable `message` out of an error body.
fn extract_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct MessageOnly {
        message: String,
    }
    serde_json::from_str::<MessageOnly>(body)
        .ok()
        .map(|m| m.message)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
