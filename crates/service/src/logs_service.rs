use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tokio::task::JoinHandle;

use common::utils::db_log::{LogReceiver, LogRecord};
use models::log;

use crate::errors::ServiceError;

/// Read and append access to the persisted application log.
#[derive(Clone)]
pub struct LogsService {
    db: DatabaseConnection,
}

impl LogsService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn get_all_logs_from_db(&self) -> Result<Vec<log::Model>, ServiceError> {
        let rows = log::Entity::find().order_by_asc(log::Column::Id).all(&self.db).await?;
        Ok(rows)
    }

    pub async fn record(&self, entry: LogRecord) -> Result<log::Model, ServiceError> {
        let am = log::ActiveModel {
            message: Set(entry.message),
            level: Set(entry.level),
            timestamp: Set(entry.timestamp.into()),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }
}

/// Drain the logging channel into the `logs` table until every sender is gone.
///
/// Failures go to stderr: reporting them through `tracing` would feed the channel again.
pub fn spawn_log_writer(mut rx: LogReceiver, logs: LogsService) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(entry) = rx.recv().await {
            if let Err(e) = logs.record(entry).await {
                eprintln!("failed to persist log entry: {e}");
            }
        }
    })
}
