//! Component operations.

use crate::client::CachetClient;
use crate::http::HttpResponse;
use crate::params::Params;
use crate::transport::Transport;
use crate::types::{ComponentOptions, ComponentSearch, ComponentStatus, ComponentUpdate, Id};

impl<T: Transport> CachetClient<T> {
    /// `GET /components`
    pub fn list_components(&self) -> Result<HttpResponse, T::Error> {
        self.get("/components", Params::new())
    }

    /// `GET /components` with filters. Unset filters are left out of the
    /// query string; `order` defaults to `desc`.
    pub fn search_components(&self, search: ComponentSearch) -> Result<HttpResponse, T::Error> {
        self.get("/components", search.into())
    }

    /// `GET /components/{id}`
    pub fn get_component(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.get(&format!("/components/{id}"), Params::new())
    }

    /// `POST /components`
    pub fn create_component(
        &self,
        name: &str,
        status: ComponentStatus,
        options: ComponentOptions,
    ) -> Result<HttpResponse, T::Error> {
        let mut params = Params::new().with("name", name).with("status", status);
        params.merge(options.into());
        self.post("/components", params)
    }

    /// `PUT /components/{id}`
    pub fn update_component(&self, id: Id, update: ComponentUpdate) -> Result<HttpResponse, T::Error> {
        self.put(&format!("/components/{id}"), update.into())
    }

    /// `DELETE /components/{id}`
    pub fn delete_component(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.delete(&format!("/components/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::params::{ParamValue, SortOrder};
    use crate::test_support::{client, BASE_URL};
    use crate::types::{ComponentOptions, ComponentSearch, ComponentStatus, ComponentUpdate, Extra};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn list_components_produces_correct_request() {
        let (client, recorder) = client();
        client.list_components().unwrap();
        let req = recorder.last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/components"));
    }

    #[test]
    fn search_omits_unset_filters() {
        let (client, recorder) = client();
        client
            .search_components(ComponentSearch {
                name: Some("API".to_string()),
                enabled: Some(true),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            recorder.last_query(),
            pairs(&[("enabled", "1"), ("name", "API"), ("order", "desc")])
        );
    }

    #[test]
    fn search_with_every_filter() {
        let (client, recorder) = client();
        client
            .search_components(ComponentSearch {
                id: Some(1),
                name: Some("API".to_string()),
                status: Some(ComponentStatus::PartialOutage),
                group_id: Some(2),
                enabled: Some(false),
                sort: Some("name".to_string()),
                order: Some(SortOrder::Asc),
                per_page: Some(50),
                extra: Extra::new(),
            })
            .unwrap();

        assert_eq!(
            recorder.last_query(),
            pairs(&[
                ("enabled", "0"),
                ("group_id", "2"),
                ("id", "1"),
                ("name", "API"),
                ("order", "asc"),
                ("per_page", "50"),
                ("sort", "name"),
                ("status", "3"),
            ])
        );
    }

    #[test]
    fn get_component_interpolates_id() {
        let (client, recorder) = client();
        client.get_component(42).unwrap();
        assert_eq!(recorder.last().url, format!("{BASE_URL}/components/42"));
    }

    #[test]
    fn create_component_sends_only_given_fields() {
        let (client, recorder) = client();
        client
            .create_component("A", ComponentStatus::Operational, ComponentOptions::default())
            .unwrap();

        let req = recorder.last();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}/components"));
        assert_eq!(recorder.last_body(), json!({"name": "A", "status": 1}));
    }

    #[test]
    fn create_component_merges_options_and_extras() {
        let (client, recorder) = client();
        let mut extra = Extra::new();
        extra.insert("tags".to_string(), ParamValue::from("api,public"));
        client
            .create_component(
                "A",
                ComponentStatus::Operational,
                ComponentOptions {
                    description: Some("Public API".to_string()),
                    group_id: Some(3),
                    extra,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(
            recorder.last_body(),
            json!({
                "name": "A",
                "status": 1,
                "description": "Public API",
                "group_id": 3,
                "tags": "api,public"
            })
        );
    }

    #[test]
    fn update_component_sends_put_with_given_fields() {
        let (client, recorder) = client();
        client
            .update_component(
                7,
                ComponentUpdate {
                    status: Some(ComponentStatus::MajorOutage),
                    ..Default::default()
                },
            )
            .unwrap();

        let req = recorder.last();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, format!("{BASE_URL}/components/7"));
        assert_eq!(recorder.last_body(), json!({"status": 4}));
    }

    #[test]
    fn delete_component_has_no_body() {
        let (client, recorder) = client();
        client.delete_component(7).unwrap();
        let req = recorder.last();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("{BASE_URL}/components/7"));
        assert!(req.body.is_none());
    }
}
