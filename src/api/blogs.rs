use super::{item_path, Ack, ApiClient, ListPage, RequestBody};
use crate::auth::AuthContext;
use crate::error::Result;
use crate::models::{BlogFilters, BlogPost};
use reqwest::Method;

const BLOGS: &str = "/blogs";
/// Wrapper keys this resource's endpoints may use
const WRAPPERS: &[&str] = &["post", "blog"];
const ADMIN_POSTS: &str = "/admin/posts";

/// Page size used by the admin listing unless the caller asks otherwise
pub const ADMIN_LIST_LIMIT: u32 = 100;

impl ApiClient {
    /// Public blog listing
    pub async fn get_blogs(&self, filters: &BlogFilters) -> Result<ListPage<BlogPost>> {
        self.fetch_list(BLOGS, filters, None).await
    }

    pub async fn get_blog(&self, id: &str) -> Result<BlogPost> {
        self.fetch_entity(&item_path(BLOGS, id), WRAPPERS, None).await
    }

    /// Admin listing including drafts and archived posts
    pub async fn get_admin_blogs(&self, auth: &AuthContext, filters: &BlogFilters) -> Result<ListPage<BlogPost>> {
        let filters = BlogFilters {
            limit: filters.limit.or(Some(ADMIN_LIST_LIMIT)),
            ..filters.clone()
        };
        self.fetch_list(ADMIN_POSTS, &filters, Some(auth)).await
    }

    pub async fn create_blog(&self, auth: &AuthContext, body: RequestBody) -> Result<BlogPost> {
        self.send_entity(Method::POST, BLOGS, body, WRAPPERS, Some(auth)).await
    }

    pub async fn update_blog(&self, auth: &AuthContext, id: &str, body: RequestBody) -> Result<BlogPost> {
        self.send_entity(Method::PUT, &item_path(BLOGS, id), body, WRAPPERS, Some(auth))
            .await
    }

    pub async fn delete_blog(&self, auth: &AuthContext, id: &str) -> Result<Ack> {
        self.remove(&item_path(BLOGS, id), auth).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::*;
    use crate::auth::AuthContext;
    use crate::models::{BlogFilters, BlogStatus};
    use reqwest::header::AUTHORIZATION;

    #[tokio::test]
    async fn public_listing_reads_blogs_envelope() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"blogs":[{"_id":"b1","title":"Golden visa","status":"published","featured":true}],"total":9}"#,
        );
        let filters = BlogFilters {
            featured: Some(true),
            category: Some("all".into()),
            ..BlogFilters::default()
        };

        let page = client(&transport).get_blogs(&filters).await.unwrap();
        assert_eq!(page.total, Some(9));
        assert_eq!(page.items[0].status, BlogStatus::Published);
        assert_eq!(path_of(&transport.last()), "/blogs?featured=true");
    }

    #[tokio::test]
    async fn admin_listing_uses_elevated_limit_and_token() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"success":true,"posts":[{"title":"Draft","status":"draft"}]}"#);

        let page = client(&transport)
            .get_admin_blogs(&AuthContext::with_token("adm"), &BlogFilters::default())
            .await
            .unwrap();

        assert_eq!(page.items[0].status, BlogStatus::Draft);
        let request = transport.last();
        assert_eq!(path_of(&request), "/admin/posts?limit=100");
        assert_eq!(request.headers[AUTHORIZATION], "Bearer adm");
    }

    #[tokio::test]
    async fn detail_unwraps_post_envelope() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"success":true,"post":{"_id":"b2","title":"Off-plan 101","views":12}}"#);
        let post = client(&transport).get_blog("b2").await.unwrap();
        assert_eq!(post.views, 12);
    }
}
