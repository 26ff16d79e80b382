use async_trait::async_trait;
use mockall::mock;

use crate::{
    errors::StoreError,
    models::{Fields, ListQuery, Record},
};

// Mock record store for testing failure paths
mock! {
    pub RecordStore {}

    #[async_trait]
    impl crate::RecordStore for RecordStore {
        async fn list_records(&self, table: &str, query: &ListQuery) -> Result<Vec<Record>, StoreError>;

        async fn create_record(&self, table: &str, fields: Fields) -> Result<Record, StoreError>;

        async fn update_record(&self, table: &str, id: &str, fields: Fields) -> Result<Record, StoreError>;

        fn backend_name(&self) -> &'static str;
    }
}
