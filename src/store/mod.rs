//! Storage layer: the `Storage` contract and its in-memory implementation.
//!
//! Lookups by id return `Ok(None)` on a miss; filters return an empty vec. The only error cases
//! are a duplicate username on user creation and a poisoned table lock.

mod memory;
mod seed;
mod table;

pub use memory::MemStorage;
pub use table::Table;

use crate::error::StorageError;
use crate::model::{
    Directory, DirectoryPatch, Id, InsertDirectory, InsertNews, InsertResource, InsertService,
    InsertStatistic, InsertUser, News, NewsPatch, Resource, ResourcePatch, Service, ServicePatch,
    Statistic, StatisticPatch, User,
};
use async_trait::async_trait;

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: Id) -> StorageResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    async fn create_user(&self, user: InsertUser) -> StorageResult<User>;

    // News
    async fn get_all_news(&self) -> StorageResult<Vec<News>>;
    async fn get_news_by_id(&self, id: Id) -> StorageResult<Option<News>>;
    async fn create_news(&self, item: InsertNews) -> StorageResult<News>;
    async fn update_news(&self, id: Id, patch: NewsPatch) -> StorageResult<Option<News>>;
    async fn delete_news(&self, id: Id) -> StorageResult<bool>;

    // Resources
    async fn get_all_resources(&self) -> StorageResult<Vec<Resource>>;
    async fn get_resources_by_category(&self, category: &str) -> StorageResult<Vec<Resource>>;
    async fn get_resource_by_id(&self, id: Id) -> StorageResult<Option<Resource>>;
    async fn create_resource(&self, item: InsertResource) -> StorageResult<Resource>;
    async fn update_resource(&self, id: Id, patch: ResourcePatch) -> StorageResult<Option<Resource>>;
    async fn delete_resource(&self, id: Id) -> StorageResult<bool>;

    // Services
    async fn get_all_services(&self) -> StorageResult<Vec<Service>>;
    async fn get_services_by_category(&self, category: &str) -> StorageResult<Vec<Service>>;
    async fn get_service_by_id(&self, id: Id) -> StorageResult<Option<Service>>;
    async fn create_service(&self, item: InsertService) -> StorageResult<Service>;
    async fn update_service(&self, id: Id, patch: ServicePatch) -> StorageResult<Option<Service>>;
    async fn delete_service(&self, id: Id) -> StorageResult<bool>;

    // Directories
    async fn get_all_directories(&self) -> StorageResult<Vec<Directory>>;
    async fn get_directories_by_region(&self, region: &str) -> StorageResult<Vec<Directory>>;
    async fn get_directory_by_id(&self, id: Id) -> StorageResult<Option<Directory>>;
    async fn create_directory(&self, item: InsertDirectory) -> StorageResult<Directory>;
    async fn update_directory(
        &self,
        id: Id,
        patch: DirectoryPatch,
    ) -> StorageResult<Option<Directory>>;
    async fn delete_directory(&self, id: Id) -> StorageResult<bool>;

    // Statistics
    async fn get_all_statistics(&self) -> StorageResult<Vec<Statistic>>;
    async fn get_statistic_by_id(&self, id: Id) -> StorageResult<Option<Statistic>>;
    async fn create_statistic(&self, item: InsertStatistic) -> StorageResult<Statistic>;
    async fn update_statistic(
        &self,
        id: Id,
        patch: StatisticPatch,
    ) -> StorageResult<Option<Statistic>>;
    async fn delete_statistic(&self, id: Id) -> StorageResult<bool>;
}
