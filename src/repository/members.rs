//! Members repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{CreateMember, Member, UpdateMember},
    repository::MemberStore,
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberStore for MembersRepository {
    async fn create(&self, member: &CreateMember) -> AppResult<Member> {
        let created = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, member: &UpdateMember) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE members SET name = $1, email = $2, phone = $3 WHERE id = $4")
                .bind(&member.name)
                .bind(&member.email)
                .bind(&member.phone)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            tracing::debug!("update of missing member {} ignored", id);
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Member>> {
        let member =
            sqlx::query_as::<_, Member>("SELECT id, name, email, phone FROM members WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(member)
    }

    async fn get_all(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>("SELECT id, name, email, phone FROM members")
            .fetch_all(&self.pool)
            .await?;

        Ok(members)
    }

    async fn list(&self, page: u32, page_size: u32) -> AppResult<Vec<Member>> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, email, phone
            FROM members
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
