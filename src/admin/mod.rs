//! Admin dashboard services: one [`EntityService`] per management screen.

use crate::api::{Ack, ApiClient, FileUpload, RequestBody};
use crate::auth::AuthContext;
use crate::editor::{EntityEditor, EntityService};
use crate::error::ApiError;
use crate::models::partner::name_taken;
use crate::models::{
    BlogFilters, BlogPost, Contact, ContactFilters, Partner, PartnerFilters, Project, ProjectFilters, Property,
    PropertyFilters, Review, ReviewFilters, WishlistFilters, WishlistItem,
};
use async_trait::async_trait;

/// Client and credentials shared by the admin services
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub client: ApiClient,
    pub auth: AuthContext,
}

impl AdminContext {
    pub fn new(client: ApiClient, auth: AuthContext) -> Self {
        Self { client, auth }
    }

    pub fn properties(&self) -> EntityEditor<PropertyAdmin> {
        EntityEditor::new(PropertyAdmin(self.clone()))
    }

    pub fn projects(&self) -> EntityEditor<ProjectAdmin> {
        EntityEditor::new(ProjectAdmin(self.clone()))
    }

    pub fn blogs(&self) -> EntityEditor<BlogAdmin> {
        EntityEditor::new(BlogAdmin(self.clone()))
    }

    pub fn partners(&self) -> EntityEditor<PartnerAdmin> {
        EntityEditor::new(PartnerAdmin(self.clone()))
    }

    pub fn contacts(&self) -> EntityEditor<ContactAdmin> {
        EntityEditor::new(ContactAdmin(self.clone()))
    }

    pub fn reviews(&self) -> EntityEditor<ReviewAdmin> {
        EntityEditor::new(ReviewAdmin(self.clone()))
    }

    pub fn wishlist(&self) -> EntityEditor<WishlistAdmin> {
        EntityEditor::new(WishlistAdmin(self.clone()))
    }
}

pub struct PropertyAdmin(AdminContext);

#[async_trait]
impl EntityService for PropertyAdmin {
    type Entity = Property;

    fn label(&self) -> &'static str {
        "property"
    }

    async fn list(&self) -> Result<Vec<Property>, ApiError> {
        Ok(self.0.client.get_properties(&PropertyFilters::default()).await?.items)
    }

    async fn create(&self, draft: &Property, uploads: &[FileUpload]) -> Result<Property, ApiError> {
        let body = RequestBody::for_entity(draft, uploads)?;
        self.0.client.create_property(&self.0.auth, body).await
    }

    async fn update(&self, id: &str, draft: &Property, uploads: &[FileUpload]) -> Result<Property, ApiError> {
        let body = RequestBody::for_entity(draft, uploads)?;
        self.0.client.update_property(&self.0.auth, id, body).await
    }

    async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        self.0.client.delete_property(&self.0.auth, id).await
    }
}

pub struct ProjectAdmin(AdminContext);

#[async_trait]
impl EntityService for ProjectAdmin {
    type Entity = Project;

    fn label(&self) -> &'static str {
        "project"
    }

    async fn list(&self) -> Result<Vec<Project>, ApiError> {
        Ok(self.0.client.get_projects(&ProjectFilters::default()).await?.items)
    }

    async fn create(&self, draft: &Project, uploads: &[FileUpload]) -> Result<Project, ApiError> {
        let body = RequestBody::for_entity(&draft.compacted(), uploads)?;
        self.0.client.create_project(&self.0.auth, body).await
    }

    async fn update(&self, id: &str, draft: &Project, uploads: &[FileUpload]) -> Result<Project, ApiError> {
        let body = RequestBody::for_entity(&draft.compacted(), uploads)?;
        self.0.client.update_project(&self.0.auth, id, body).await
    }

    async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        self.0.client.delete_project(&self.0.auth, id).await
    }
}

pub struct BlogAdmin(AdminContext);

#[async_trait]
impl EntityService for BlogAdmin {
    type Entity = BlogPost;

    fn label(&self) -> &'static str {
        "blog post"
    }

    async fn list(&self) -> Result<Vec<BlogPost>, ApiError> {
        let page = self
            .0
            .client
            .get_admin_blogs(&self.0.auth, &BlogFilters::default())
            .await?;
        Ok(page.items)
    }

    async fn create(&self, draft: &BlogPost, uploads: &[FileUpload]) -> Result<BlogPost, ApiError> {
        let body = RequestBody::for_entity(&draft.compacted(), uploads)?;
        self.0.client.create_blog(&self.0.auth, body).await
    }

    async fn update(&self, id: &str, draft: &BlogPost, uploads: &[FileUpload]) -> Result<BlogPost, ApiError> {
        let body = RequestBody::for_entity(&draft.compacted(), uploads)?;
        self.0.client.update_blog(&self.0.auth, id, body).await
    }

    async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        self.0.client.delete_blog(&self.0.auth, id).await
    }
}

pub struct PartnerAdmin(AdminContext);

#[async_trait]
impl EntityService for PartnerAdmin {
    type Entity = Partner;

    fn label(&self) -> &'static str {
        "partner"
    }

    async fn list(&self) -> Result<Vec<Partner>, ApiError> {
        Ok(self.0.client.get_partners(&PartnerFilters::default()).await?.items)
    }

    async fn create(&self, draft: &Partner, uploads: &[FileUpload]) -> Result<Partner, ApiError> {
        let body = RequestBody::for_entity(&draft.compacted(), uploads)?;
        self.0.client.create_partner(&self.0.auth, body).await
    }

    async fn update(&self, id: &str, draft: &Partner, uploads: &[FileUpload]) -> Result<Partner, ApiError> {
        let body = RequestBody::for_entity(&draft.compacted(), uploads)?;
        self.0.client.update_partner(&self.0.auth, id, body).await
    }

    async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        self.0.client.delete_partner(&self.0.auth, id).await
    }

    fn validate(&self, draft: &Partner, existing: &[Partner], editing: Option<&str>) -> Vec<String> {
        if name_taken(existing, &draft.name, editing) {
            vec![format!("A partner named {:?} already exists", draft.name.trim())]
        } else {
            Vec::new()
        }
    }
}

pub struct ContactAdmin(AdminContext);

#[async_trait]
impl EntityService for ContactAdmin {
    type Entity = Contact;

    fn label(&self) -> &'static str {
        "contact"
    }

    async fn list(&self) -> Result<Vec<Contact>, ApiError> {
        let page = self
            .0
            .client
            .get_contacts(&self.0.auth, &ContactFilters::default())
            .await?;
        Ok(page.items)
    }

    /// Admins record enquiries taken by phone through the same form
    async fn create(&self, draft: &Contact, _uploads: &[FileUpload]) -> Result<Contact, ApiError> {
        self.0.client.submit_contact(draft).await
    }

    async fn update(&self, id: &str, draft: &Contact, _uploads: &[FileUpload]) -> Result<Contact, ApiError> {
        let edited = Contact {
            is_edited: true,
            ..draft.clone()
        };
        self.0
            .client
            .update_contact(&self.0.auth, id, RequestBody::json(&edited)?)
            .await
    }

    async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        self.0.client.delete_contact(&self.0.auth, id).await
    }
}

pub struct ReviewAdmin(AdminContext);

#[async_trait]
impl EntityService for ReviewAdmin {
    type Entity = Review;

    fn label(&self) -> &'static str {
        "review"
    }

    async fn list(&self) -> Result<Vec<Review>, ApiError> {
        Ok(self.0.client.get_reviews(&ReviewFilters::default()).await?.items)
    }

    async fn create(&self, draft: &Review, _uploads: &[FileUpload]) -> Result<Review, ApiError> {
        self.0.client.submit_review(draft).await
    }

    async fn update(&self, id: &str, draft: &Review, _uploads: &[FileUpload]) -> Result<Review, ApiError> {
        self.0
            .client
            .update_review(&self.0.auth, id, RequestBody::json(draft)?)
            .await
    }

    async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        self.0.client.delete_review(&self.0.auth, id).await
    }
}

pub struct WishlistAdmin(AdminContext);

#[async_trait]
impl EntityService for WishlistAdmin {
    type Entity = WishlistItem;

    fn label(&self) -> &'static str {
        "wishlist item"
    }

    async fn list(&self) -> Result<Vec<WishlistItem>, ApiError> {
        let page = self
            .0
            .client
            .get_wishlist(&self.0.auth, &WishlistFilters::default())
            .await?;
        Ok(page.items)
    }

    async fn create(&self, draft: &WishlistItem, _uploads: &[FileUpload]) -> Result<WishlistItem, ApiError> {
        self.0.client.add_to_wishlist(&self.0.auth, draft).await
    }

    async fn update(&self, id: &str, draft: &WishlistItem, _uploads: &[FileUpload]) -> Result<WishlistItem, ApiError> {
        self.0
            .client
            .update_wishlist_item(&self.0.auth, id, RequestBody::json(draft)?)
            .await
    }

    async fn delete(&self, id: &str) -> Result<Ack, ApiError> {
        self.0.client.remove_from_wishlist(&self.0.auth, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::*;
    use crate::editor::{DeleteOutcome, EditorError};
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use reqwest::Method;

    fn admin(transport: &std::sync::Arc<FakeTransport>) -> AdminContext {
        AdminContext::new(client(transport), AuthContext::with_token("admin-token"))
    }

    #[tokio::test]
    async fn new_partner_posts_then_refetches() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"partners":[]}"#);
        transport.respond(201, r#"{"success":true,"data":{"_id":"p1","name":"Sobha"}}"#);
        transport.respond(200, r#"{"partners":[{"_id":"p1","name":"Sobha"}]}"#);

        let mut editor = admin(&transport).partners();
        editor.refresh().await.unwrap();
        editor.open_new();
        editor.form_mut().name = "Sobha".into();
        editor.form_mut().description = "Luxury developer".into();
        editor.submit().await.unwrap();

        let requests = transport.requests();
        let methods: Vec<_> = requests.iter().map(|r| r.method.clone()).collect();
        assert_eq!(methods, vec![Method::GET, Method::POST, Method::GET]);
        assert_eq!(requests[1].headers[AUTHORIZATION], "Bearer admin-token");
        assert_eq!(editor.items().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_partner_name_is_caught_before_sending() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"partners":[{"_id":"p1","name":"Emaar Properties"}]}"#);

        let mut editor = admin(&transport).partners();
        editor.refresh().await.unwrap();
        editor.open_new();
        editor.form_mut().name = "emaar properties".into();
        editor.form_mut().description = "dup".into();

        assert!(matches!(editor.submit().await, Err(EditorError::Invalid(_))));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn editing_contact_marks_it_edited() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"success":true,"data":{"_id":"c1","name":"Lina","isEdited":true}}"#);
        transport.respond(200, r#"{"success":true,"data":[]}"#);

        let mut editor = admin(&transport).contacts();
        editor.edit(&Contact {
            id: Some("c1".into()),
            name: "Lina".into(),
            email: "lina@example.com".into(),
            message: "Call back".into(),
            ..Contact::default()
        });
        editor.submit().await.unwrap();

        let update = &transport.requests()[0];
        assert_eq!(update.method, Method::PUT);
        assert_eq!(path_of(update), "/contacts/c1");
        match &update.body {
            Some(RequestBody::Json(value)) => assert_eq!(value["isEdited"], true),
            other => panic!("expected json body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn property_with_image_submits_multipart() {
        let transport = FakeTransport::new();
        transport.respond(201, r#"{"success":true,"data":{"_id":"n1","title":"Loft"}}"#);
        transport.respond(200, "[]");

        let mut editor = admin(&transport).properties();
        editor.open_new();
        {
            let form = editor.form_mut();
            form.title = "Loft".into();
            form.description = "Open plan".into();
            form.location = "JLT".into();
            form.price = 950_000.0;
        }
        editor.attach_upload(FileUpload::new("image", "loft.jpg", vec![1, 2]).with_mime("image/jpeg"));
        editor.submit().await.unwrap();

        let create = &transport.requests()[0];
        assert!(create.headers.get(CONTENT_TYPE).is_none());
        assert!(editor.uploads().is_empty());
    }

    #[tokio::test]
    async fn blog_delete_refetches_admin_posts() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"success":true,"message":"Deleted"}"#);
        transport.respond(200, r#"{"posts":[]}"#);

        let mut editor = admin(&transport).blogs();
        let outcome = editor.delete("b1", &|_: &str| true).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(path_of(&requests[0]), "/blogs/b1");
        assert_eq!(path_of(&requests[1]), "/admin/posts?limit=100");
    }

    #[tokio::test]
    async fn rejected_delete_is_reported() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"success":false,"message":"Review is locked"}"#);

        let mut editor = admin(&transport).reviews();
        let err = editor.delete("r1", &|_: &str| true).await.unwrap_err();
        assert_eq!(err.to_string(), "Server refused the change: Review is locked");
        assert_eq!(transport.requests().len(), 1);
    }
}
