use super::{item_path, Ack, ApiClient, ListPage, RequestBody};
use crate::auth::AuthContext;
use crate::error::Result;
use crate::models::{Partner, PartnerFilters};
use reqwest::Method;

const PARTNERS: &str = "/partners";
/// Wrapper keys this resource's endpoints may use
const WRAPPERS: &[&str] = &["partner"];

impl ApiClient {
    pub async fn get_partners(&self, filters: &PartnerFilters) -> Result<ListPage<Partner>> {
        self.fetch_list(PARTNERS, filters, None).await
    }

    pub async fn get_partner(&self, id: &str) -> Result<Partner> {
        self.fetch_entity(&item_path(PARTNERS, id), WRAPPERS, None).await
    }

    pub async fn create_partner(&self, auth: &AuthContext, body: RequestBody) -> Result<Partner> {
        self.send_entity(Method::POST, PARTNERS, body, WRAPPERS, Some(auth)).await
    }

    pub async fn update_partner(&self, auth: &AuthContext, id: &str, body: RequestBody) -> Result<Partner> {
        self.send_entity(Method::PUT, &item_path(PARTNERS, id), body, WRAPPERS, Some(auth))
            .await
    }

    pub async fn delete_partner(&self, auth: &AuthContext, id: &str) -> Result<Ack> {
        self.remove(&item_path(PARTNERS, id), auth).await
    }
}
