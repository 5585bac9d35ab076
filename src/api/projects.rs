use super::{item_path, Ack, ApiClient, ListPage, RequestBody};
use crate::auth::AuthContext;
use crate::error::Result;
use crate::models::{Project, ProjectFilters};
use reqwest::Method;

const PROJECTS: &str = "/projects";
/// Wrapper keys this resource's endpoints may use
const WRAPPERS: &[&str] = &["project"];

impl ApiClient {
    pub async fn get_projects(&self, filters: &ProjectFilters) -> Result<ListPage<Project>> {
        self.fetch_list(PROJECTS, filters, None).await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project> {
        self.fetch_entity(&item_path(PROJECTS, id), WRAPPERS, None).await
    }

    pub async fn create_project(&self, auth: &AuthContext, body: RequestBody) -> Result<Project> {
        self.send_entity(Method::POST, PROJECTS, body, WRAPPERS, Some(auth)).await
    }

    pub async fn update_project(&self, auth: &AuthContext, id: &str, body: RequestBody) -> Result<Project> {
        self.send_entity(Method::PUT, &item_path(PROJECTS, id), body, WRAPPERS, Some(auth))
            .await
    }

    pub async fn delete_project(&self, auth: &AuthContext, id: &str) -> Result<Ack> {
        self.remove(&item_path(PROJECTS, id), auth).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::*;
    use crate::api::{FileUpload, RequestBody};
    use crate::auth::AuthContext;
    use crate::models::{Project, ProjectFilters};
    use reqwest::header::CONTENT_TYPE;

    #[tokio::test]
    async fn list_reads_data_envelope() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"success":true,"data":[{"title":"Creek Rise","status":"ready"}],"total":1}"#);
        let filters = ProjectFilters {
            status: Some("ready".into()),
            category: Some("all".into()),
            ..ProjectFilters::default()
        };

        let page = client(&transport).get_projects(&filters).await.unwrap();
        assert_eq!(page.total, Some(1));
        assert_eq!(path_of(&transport.last()), "/projects?status=ready");
    }

    #[tokio::test]
    async fn create_with_images_goes_multipart() {
        let transport = FakeTransport::new();
        transport.respond(201, r#"{"success":true,"data":{"_id":"p9","title":"Bay Villas"}}"#);
        let draft = Project {
            title: "Bay Villas".into(),
            ..Project::default()
        };
        let upload = FileUpload::new("images", "render.jpg", vec![0xff, 0xd8]).with_mime("image/jpeg");

        let body = RequestBody::for_entity(&draft, &[upload]).unwrap();
        let created = client(&transport)
            .create_project(&AuthContext::with_token("t"), body)
            .await
            .unwrap();

        assert_eq!(created.id.as_deref(), Some("p9"));
        let request = transport.last();
        assert!(request.headers.get(CONTENT_TYPE).is_none());
        assert!(request.body.as_ref().is_some_and(RequestBody::is_multipart));
    }

    #[tokio::test]
    async fn single_project_by_id() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"_id":"p1","title":"Harbour Gate"}"#);
        let project = client(&transport).get_project("p1").await.unwrap();
        assert_eq!(project.title, "Harbour Gate");
        assert_eq!(path_of(&transport.last()), "/projects/p1");
    }
}
