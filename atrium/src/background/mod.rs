mod submitter;

pub use submitter::AuthSubmitter;

use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Tracks spawned background tasks so they can be cleaned up on exit.
///
/// Submission tasks get unique IDs (a fresh sequence number per
/// submit), so an in-flight auth call is never replaced or cancelled by
/// a later one.
#[derive(Default)]
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task under the given ID. If a task with the same ID is
    /// still running it is aborted first.
    pub fn spawn_task<F>(&mut self, id: String, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.reap_finished();

        if let Some(existing) = self.tasks.remove(&id) {
            tracing::warn!("Replacing background task: {}", id);
            existing.abort();
        }

        tracing::debug!("Spawning background task: {}", id);
        let handle = tokio::spawn(future);
        self.tasks.insert(id, handle);
    }

    /// Drop handles for tasks that have already completed
    fn reap_finished(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }

    pub fn active_task_count(&self) -> usize {
        self.tasks
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Abort everything still running. Called on shutdown.
    pub fn cancel_all(&mut self) {
        for (id, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                tracing::debug!("Cancelling background task: {}", id);
                handle.abort();
            }
        }
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tasks_with_distinct_ids_coexist() {
        let mut manager = BackgroundTaskManager::new();

        manager.spawn_task("login_1".to_string(), async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        });
        manager.spawn_task("login_2".to_string(), async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        });

        assert_eq!(manager.active_task_count(), 2);
        manager.cancel_all();
        assert_eq!(manager.active_task_count(), 0);
    }

    #[tokio::test]
    async fn finished_tasks_are_reaped_on_next_spawn() {
        let mut manager = BackgroundTaskManager::new();

        manager.spawn_task("register_1".to_string(), async {});
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        manager.spawn_task("register_2".to_string(), async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        });
        assert_eq!(manager.active_task_count(), 1);

        manager.cancel_all();
    }
}
