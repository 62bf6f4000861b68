//! Members service

use std::sync::Arc;

use crate::{
    audit::AuditLog,
    error::{AppError, AppResult},
    export,
    models::{CreateMember, Member, UpdateMember},
    repository::MemberStore,
};

#[derive(Clone)]
pub struct MembersService {
    members: Arc<dyn MemberStore>,
    audit: Arc<AuditLog>,
}

impl MembersService {
    pub fn new(members: Arc<dyn MemberStore>, audit: Arc<AuditLog>) -> Self {
        Self { members, audit }
    }

    pub async fn add_member(&self, member: CreateMember) -> AppResult<Member> {
        let created = self.members.create(&member).await?;
        self.audit.record(format!("{} Added", created.name));

        Ok(created)
    }

    pub async fn update_member(&self, id: i32, member: UpdateMember) -> AppResult<()> {
        self.members.update(id, &member).await?;
        self.audit
            .record(format!("Updated member: {} (ID: {})", member.name, id));

        Ok(())
    }

    pub async fn delete_member(&self, id: i32) -> AppResult<()> {
        self.members.delete(id).await?;
        self.audit.record(format!("Deleted member with ID: {}", id));

        Ok(())
    }

    pub async fn get_member(&self, id: i32) -> AppResult<Member> {
        self.members
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    pub async fn all_members(&self) -> AppResult<Vec<Member>> {
        self.members.get_all().await
    }

    /// Page of members ordered by name
    pub async fn list_members(&self, page: u32, page_size: u32) -> AppResult<Vec<Member>> {
        super::validate_page(page, page_size)?;
        self.members.list(page, page_size).await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.members.count().await
    }

    /// Flatten the member roster to CSV
    pub async fn export_csv(&self) -> AppResult<String> {
        let members = self.members.get_all().await?;
        Ok(export::members_to_csv(&members))
    }
}
