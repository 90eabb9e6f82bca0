//! In-memory `Storage` backed by one locked `Table` per entity.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{seed, Storage, StorageResult, Table};
use crate::error::StorageError;
use crate::model::{
    Directory, DirectoryPatch, Id, InsertDirectory, InsertNews, InsertResource, InsertService,
    InsertStatistic, InsertUser, Insertable, News, NewsPatch, Resource, ResourcePatch, Service,
    ServicePatch, Statistic, StatisticPatch, User,
};

/// Process-lifetime store. Each table sits behind its own lock, so a single read or write is
/// atomic; concurrent updates to the same record are still last-write-wins.
#[derive(Debug, Default)]
pub struct MemStorage {
    users: RwLock<Table<User>>,
    news: RwLock<Table<News>>,
    resources: RwLock<Table<Resource>>,
    services: RwLock<Table<Service>>,
    directories: RwLock<Table<Directory>>,
    statistics: RwLock<Table<Statistic>>,
}

fn read<'a, T>(
    lock: &'a RwLock<Table<T>>,
    name: &'static str,
) -> StorageResult<RwLockReadGuard<'a, Table<T>>> {
    lock.read().map_err(|_| StorageError::Poisoned(name))
}

fn write<'a, T>(
    lock: &'a RwLock<Table<T>>,
    name: &'static str,
) -> StorageResult<RwLockWriteGuard<'a, Table<T>>> {
    lock.write().map_err(|_| StorageError::Poisoned(name))
}

fn seeded<T: Clone, I: Insertable<Record = T>>(rows: Vec<I>) -> RwLock<Table<T>> {
    let mut table = Table::new();
    for row in rows {
        table.insert(row);
    }
    RwLock::new(table)
}

impl MemStorage {
    /// Store populated with the demo seed batch.
    pub fn new() -> Self {
        let storage = Self {
            users: seeded(seed::users()),
            news: seeded(seed::news()),
            resources: seeded(seed::resources()),
            services: seeded(seed::services()),
            directories: seeded(seed::directories()),
            statistics: seeded(seed::statistics()),
        };
        tracing::debug!("in-memory storage seeded");
        storage
    }

    /// Store with every collection empty and every counter at 1.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: Id) -> StorageResult<Option<User>> {
        Ok(read(&self.users, "users")?.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(read(&self.users, "users")?.find(|u| u.username == username))
    }

    async fn create_user(&self, user: InsertUser) -> StorageResult<User> {
        let mut users = write(&self.users, "users")?;
        if users.find(|u| u.username == user.username).is_some() {
            return Err(StorageError::DuplicateUsername(user.username));
        }
        let created = users.insert(user);
        tracing::debug!(id = created.id, "user created");
        Ok(created)
    }

    async fn get_all_news(&self) -> StorageResult<Vec<News>> {
        Ok(read(&self.news, "news")?.all())
    }

    async fn get_news_by_id(&self, id: Id) -> StorageResult<Option<News>> {
        Ok(read(&self.news, "news")?.get(id))
    }

    async fn create_news(&self, item: InsertNews) -> StorageResult<News> {
        let created = write(&self.news, "news")?.insert(item);
        tracing::debug!(id = created.id, "news item created");
        Ok(created)
    }

    async fn update_news(&self, id: Id, patch: NewsPatch) -> StorageResult<Option<News>> {
        Ok(write(&self.news, "news")?.update(id, patch))
    }

    async fn delete_news(&self, id: Id) -> StorageResult<bool> {
        Ok(write(&self.news, "news")?.remove(id))
    }

    async fn get_all_resources(&self) -> StorageResult<Vec<Resource>> {
        Ok(read(&self.resources, "resources")?.all())
    }

    async fn get_resources_by_category(&self, category: &str) -> StorageResult<Vec<Resource>> {
        Ok(read(&self.resources, "resources")?.filter(|r| r.category == category))
    }

    async fn get_resource_by_id(&self, id: Id) -> StorageResult<Option<Resource>> {
        Ok(read(&self.resources, "resources")?.get(id))
    }

    async fn create_resource(&self, item: InsertResource) -> StorageResult<Resource> {
        let created = write(&self.resources, "resources")?.insert(item);
        tracing::debug!(id = created.id, "resource created");
        Ok(created)
    }

    async fn update_resource(&self, id: Id, patch: ResourcePatch) -> StorageResult<Option<Resource>> {
        Ok(write(&self.resources, "resources")?.update(id, patch))
    }

    async fn delete_resource(&self, id: Id) -> StorageResult<bool> {
        Ok(write(&self.resources, "resources")?.remove(id))
    }

    async fn get_all_services(&self) -> StorageResult<Vec<Service>> {
        Ok(read(&self.services, "services")?.all())
    }

    async fn get_services_by_category(&self, category: &str) -> StorageResult<Vec<Service>> {
        Ok(read(&self.services, "services")?.filter(|s| s.category == category))
    }

    async fn get_service_by_id(&self, id: Id) -> StorageResult<Option<Service>> {
        Ok(read(&self.services, "services")?.get(id))
    }

    async fn create_service(&self, item: InsertService) -> StorageResult<Service> {
        let created = write(&self.services, "services")?.insert(item);
        tracing::debug!(id = created.id, "service created");
        Ok(created)
    }

    async fn update_service(&self, id: Id, patch: ServicePatch) -> StorageResult<Option<Service>> {
        Ok(write(&self.services, "services")?.update(id, patch))
    }

    async fn delete_service(&self, id: Id) -> StorageResult<bool> {
        Ok(write(&self.services, "services")?.remove(id))
    }

    async fn get_all_directories(&self) -> StorageResult<Vec<Directory>> {
        Ok(read(&self.directories, "directories")?.all())
    }

    async fn get_directories_by_region(&self, region: &str) -> StorageResult<Vec<Directory>> {
        Ok(read(&self.directories, "directories")?.filter(|d| d.region == region))
    }

    async fn get_directory_by_id(&self, id: Id) -> StorageResult<Option<Directory>> {
        Ok(read(&self.directories, "directories")?.get(id))
    }

    async fn create_directory(&self, item: InsertDirectory) -> StorageResult<Directory> {
        let created = write(&self.directories, "directories")?.insert(item);
        tracing::debug!(id = created.id, "directory created");
        Ok(created)
    }

    async fn update_directory(
        &self,
        id: Id,
        patch: DirectoryPatch,
    ) -> StorageResult<Option<Directory>> {
        Ok(write(&self.directories, "directories")?.update(id, patch))
    }

    async fn delete_directory(&self, id: Id) -> StorageResult<bool> {
        Ok(write(&self.directories, "directories")?.remove(id))
    }

    async fn get_all_statistics(&self) -> StorageResult<Vec<Statistic>> {
        Ok(read(&self.statistics, "statistics")?.all())
    }

    async fn get_statistic_by_id(&self, id: Id) -> StorageResult<Option<Statistic>> {
        Ok(read(&self.statistics, "statistics")?.get(id))
    }

    async fn create_statistic(&self, item: InsertStatistic) -> StorageResult<Statistic> {
        let created = write(&self.statistics, "statistics")?.insert(item);
        tracing::debug!(id = created.id, "statistic created");
        Ok(created)
    }

    async fn update_statistic(
        &self,
        id: Id,
        patch: StatisticPatch,
    ) -> StorageResult<Option<Statistic>> {
        Ok(write(&self.statistics, "statistics")?.update(id, patch))
    }

    async fn delete_statistic(&self, id: Id) -> StorageResult<bool> {
        Ok(write(&self.statistics, "statistics")?.remove(id))
    }
}
