use async_trait::async_trait;

use crate::{
    db::PgStore,
    store::{StoreResult, TaskId, TaskStore, UserId},
    tasks::repo_types::{Task, TaskFields},
};

#[async_trait]
impl TaskStore for PgStore {
    async fn list_by_owner(&self, owner: UserId) -> StoreResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, name, description, priority, created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let row = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, name, description, priority, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, owner: UserId, fields: TaskFields) -> StoreResult<Task> {
        let row = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, name, description, priority)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, description, priority, created_at, updated_at
            "#,
        )
        .bind(owner)
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.priority)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: TaskId,
        owner: UserId,
        fields: TaskFields,
    ) -> StoreResult<Option<Task>> {
        let row = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
               SET name = $3, description = $4, priority = $5, updated_at = now()
             WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, priority, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.priority)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: TaskId, owner: UserId) -> StoreResult<u64> {
        let res = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected())
    }
}
