use super::{item_path, Ack, ApiClient, ListPage, RequestBody};
use crate::auth::AuthContext;
use crate::error::Result;
use crate::models::{WishlistFilters, WishlistItem};
use reqwest::Method;

const WISHLIST: &str = "/wishlist";
/// Wrapper keys this resource's endpoints may use
const WRAPPERS: &[&str] = &["wishlistItem"];
const ADMIN_WISHLIST: &str = "/admin/wishlist";

impl ApiClient {
    /// Saved items for the session the token belongs to
    pub async fn get_wishlist(&self, auth: &AuthContext, filters: &WishlistFilters) -> Result<ListPage<WishlistItem>> {
        self.fetch_list(ADMIN_WISHLIST, filters, Some(auth)).await
    }

    /// Save a property; a token is attached when there is one
    pub async fn add_to_wishlist(&self, auth: &AuthContext, item: &WishlistItem) -> Result<WishlistItem> {
        self.send_entity(Method::POST, WISHLIST, RequestBody::json(item)?, WRAPPERS, Some(auth))
            .await
    }

    pub async fn update_wishlist_item(&self, auth: &AuthContext, id: &str, body: RequestBody) -> Result<WishlistItem> {
        self.send_entity(Method::PUT, &item_path(WISHLIST, id), body, WRAPPERS, Some(auth))
            .await
    }

    pub async fn remove_from_wishlist(&self, auth: &AuthContext, id: &str) -> Result<Ack> {
        self.remove(&item_path(WISHLIST, id), auth).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::*;
    use crate::auth::AuthContext;
    use crate::models::{Property, WishlistFilters, WishlistItem};
    use reqwest::header::AUTHORIZATION;

    #[tokio::test]
    async fn admin_listing_reads_wishlist_envelope() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"wishlist":[{"propertyId":"p1","propertyTitle":"Loft","userNote":"call"}]}"#);
        let page = client(&transport)
            .get_wishlist(&AuthContext::with_token("t"), &WishlistFilters::default())
            .await
            .unwrap();

        assert_eq!(page.items[0].user_note, "call");
        assert_eq!(path_of(&transport.last()), "/admin/wishlist");
    }

    #[tokio::test]
    async fn anonymous_add_carries_snapshot() {
        let transport = FakeTransport::new();
        transport.respond(201, r#"{"success":true,"data":{"_id":"w1","propertyId":"p1"}}"#);
        let property = Property {
            id: Some("p1".into()),
            title: "Loft".into(),
            ..Property::default()
        };

        let saved = client(&transport)
            .add_to_wishlist(&AuthContext::anonymous(), &WishlistItem::for_property(&property, ""))
            .await
            .unwrap();

        assert_eq!(saved.id.as_deref(), Some("w1"));
        assert!(transport.last().headers.get(AUTHORIZATION).is_none());
    }
}
