// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(all(test, feature = "dataset-service"))]
mod mocking {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptions;
    use gax::paginator::PageableResponse;
    use longrunning::model::{GetOperationRequest, Operation};
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use vertexai_aiplatform_v1::builder::RequestOptionsBuilder;
    use vertexai_aiplatform_v1::client::DatasetService;
    use vertexai_aiplatform_v1::model::{
        CreateDatasetOperationMetadata, CreateDatasetRequest, Dataset, GenericOperationMetadata,
        ListDatasetsRequest, ListDatasetsResponse,
    };

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        DatasetService {}
        impl vertexai_aiplatform_v1::stub::DatasetService for DatasetService {
            async fn create_dataset(&self, req: CreateDatasetRequest, _options: RequestOptions) -> gax::Result<Operation>;
            async fn get_dataset(&self, req: vertexai_aiplatform_v1::model::GetDatasetRequest, _options: RequestOptions) -> gax::Result<Dataset>;
            async fn list_datasets(&self, req: ListDatasetsRequest, _options: RequestOptions) -> gax::Result<ListDatasetsResponse>;
            async fn get_operation(&self, req: GetOperationRequest, _options: RequestOptions) -> gax::Result<Operation>;
        }
    }

    fn page(count: usize, token: &str) -> ListDatasetsResponse {
        let datasets = (0..count).map(|i| Dataset::default().set_name(format!("{token}-{i}")));
        ListDatasetsResponse::default()
            .set_datasets(datasets)
            .set_next_page_token(token)
    }

    fn pages_mock() -> MockDatasetService {
        let mut mock = MockDatasetService::new();
        let mut seq = mockall::Sequence::new();
        for (previous, count, next) in [("", 3, "abc"), ("abc", 0, "def"), ("def", 1, "ghi"), ("ghi", 2, "")] {
            mock.expect_list_datasets()
                .once()
                .in_sequence(&mut seq)
                .withf(move |r, _| {
                    r.parent == "projects/p/locations/l" && r.page_token == previous
                })
                .returning(move |_, _| Ok(page(count, next)));
        }
        mock
    }

    #[tokio::test]
    async fn pager_items() -> Result<()> {
        let client = DatasetService::from_stub(pages_mock());
        let mut items = client
            .list_datasets()
            .set_parent("projects/p/locations/l")
            .send()
            .await?
            .by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            names.push(item?.name);
        }
        assert_eq!(
            names,
            vec!["abc-0", "abc-1", "abc-2", "ghi-0", "-0", "-1"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn pager_pages() -> Result<()> {
        let client = DatasetService::from_stub(pages_mock());
        let pager = client
            .list_datasets()
            .set_parent("projects/p/locations/l")
            .send()
            .await?;
        assert_eq!(pager.current().next_page_token, "abc");

        let mut pages = pager.by_page();
        let mut tokens = Vec::new();
        let mut total = 0;
        while let Some(page) = pages.next().await {
            let page = page?;
            tokens.push(page.next_page_token());
            total += page.items().len();
        }
        assert_eq!(tokens, vec!["abc", "def", "ghi", ""]);
        assert_eq!(total, 6);
        Ok(())
    }

    #[tokio::test]
    async fn long_running_operation() -> Result<()> {
        let metadata = CreateDatasetOperationMetadata::default()
            .set_generic_metadata(GenericOperationMetadata::default());
        let dataset = Dataset::default()
            .set_name("projects/p/locations/l/datasets/d")
            .set_display_name("spam");
        let response = wkt::Any::from_msg(&dataset)?;
        let metadata = wkt::Any::from_msg(&metadata)?;

        let mut mock = MockDatasetService::new();
        mock.expect_create_dataset()
            .once()
            .withf(|r, _| r.parent == "projects/p/locations/l")
            .returning(|_, _| Ok(Operation::default().set_name("operations/spam")));
        mock.expect_get_operation()
            .once()
            .withf(|r, _| r.name == "operations/spam")
            .returning(move |_, _| {
                Ok(Operation::default()
                    .set_name("operations/spam")
                    .set_metadata(metadata.clone())
                    .set_done(true)
                    .set_response(response.clone()))
            });

        let client = DatasetService::from_stub(mock);
        let mut op = client
            .create_dataset()
            .set_parent("projects/p/locations/l")
            .set_dataset(Dataset::default().set_display_name("spam"))
            .with_polling_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(1))
                    .clamp(),
            )
            .send()
            .await?;
        assert_eq!(op.name(), "operations/spam");
        assert!(!op.done());

        let got = op.result(None).await?;
        assert_eq!(got, dataset);
        assert!(op.done());
        assert!(op.metadata().is_some(), "{op:?}");
        Ok(())
    }

    #[tokio::test]
    async fn request_and_flattened_arguments() -> Result<()> {
        let mut mock = MockDatasetService::new();
        mock.expect_create_dataset().never();
        let client = DatasetService::from_stub(mock);

        let err = client
            .create_dataset()
            .with_request(CreateDatasetRequest::default().set_parent("projects/p/locations/l"))
            .set_parent("parent_value")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(
            err.to_string()
                .contains("cannot accept both request and individual field arguments"),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_populated() -> Result<()> {
        let mut mock = MockDatasetService::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_create_dataset()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| uuid::Uuid::parse_str(&r.request_id).is_ok())
            .returning(|_, _| Ok(Operation::default().set_name("operations/a")));
        mock.expect_create_dataset()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.request_id == "caller-supplied")
            .returning(|_, _| Ok(Operation::default().set_name("operations/b")));
        let client = DatasetService::from_stub(mock);

        let op = client
            .create_dataset()
            .set_parent("projects/p/locations/l")
            .send()
            .await?;
        assert_eq!(op.name(), "operations/a");

        let op = client
            .create_dataset()
            .with_request(
                CreateDatasetRequest::default()
                    .set_parent("projects/p/locations/l")
                    .set_request_id("caller-supplied"),
            )
            .send()
            .await?;
        assert_eq!(op.name(), "operations/b");
        Ok(())
    }

    #[tokio::test]
    async fn service_errors_pass_through() -> Result<()> {
        let mut mock = MockDatasetService::new();
        mock.expect_get_dataset().once().returning(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("not found"),
            ))
        });
        let client = DatasetService::from_stub(mock);
        let err = client
            .get_dataset()
            .set_name("projects/p/locations/l/datasets/missing")
            .send()
            .await
            .unwrap_err();
        let status = err.status().expect("a service error");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "not found");
        Ok(())
    }

    #[derive(Debug)]
    struct Empty;
    impl vertexai_aiplatform_v1::stub::DatasetService for Empty {}

    #[tokio::test]
    async fn unimplemented_stub_methods() -> Result<()> {
        let client = DatasetService::from_stub(Empty);
        let err = client
            .update_dataset()
            .set_dataset(Dataset::default())
            .send()
            .await
            .unwrap_err();
        let status = err.status().expect("a service error");
        assert_eq!(status.code, Code::Unimplemented);
        assert!(status.message.contains("update_dataset"), "{status:?}");
        Ok(())
    }
}
