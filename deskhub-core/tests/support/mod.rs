//! Shared fixtures for the scenario tests: a coworking member record, its
//! screen schema, and a source that can be told to fail.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use deskhub_core::schema::{ListSchema, SortKey};
use deskhub_core::source::{InMemorySource, RecordSource};
use deskhub_model::{
    FilterCriteria, PageResult, RetrievalError, RetrievalResult,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: String,
    pub role: String,
    pub joined: DateTime<Utc>,
    pub desk_rate: f64,
}

pub fn member(
    name: &str,
    status: &str,
    role: &str,
    joined_year: i32,
    desk_rate: f64,
) -> Member {
    Member {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!(
            "{}@example.com",
            name.to_lowercase().replace(' ', ".")
        ),
        status: status.to_string(),
        role: role.to_string(),
        joined: Utc
            .with_ymd_and_hms(joined_year, 6, 1, 9, 0, 0)
            .single()
            .unwrap(),
        desk_rate,
    }
}

pub fn member_schema() -> Arc<ListSchema<Member>> {
    Arc::new(
        ListSchema::new()
            .with_facet(
                "status",
                &["Active", "Suspended", "Invited"],
                |m: &Member| Some(m.status.as_str()),
            )
            .with_facet(
                "role",
                &["Admin", "Staff", "Member"],
                |m: &Member| Some(m.role.as_str()),
            )
            .with_column("name", |m: &Member| SortKey::folded_text(&m.name))
            .with_column("joined", |m: &Member| SortKey::date(m.joined))
            .with_column("desk_rate", |m: &Member| {
                SortKey::number(m.desk_rate)
            })
            .with_search_field(|m: &Member| Some(m.name.as_str()))
            .with_search_field(|m: &Member| Some(m.email.as_str())),
    )
}

/// Twelve members, five of them Active, in a fixed order.
pub fn roster() -> Vec<Member> {
    let statuses = [
        "Active", "Suspended", "Invited", "Active", "Suspended", "Invited",
        "Active", "Suspended", "Invited", "Active", "Suspended", "Active",
    ];
    let names = [
        "Asha Rao", "Bruno Silva", "Chen Wei", "Dinah Okafor", "Emil Novak",
        "Farah Khan", "Gita Patel", "Hana Sato", "Ivan Petrov", "Jude Akin",
        "Kira Lange", "Liam Doyle",
    ];
    names
        .iter()
        .zip(statuses)
        .enumerate()
        .map(|(i, (name, status))| {
            member(name, status, "Member", 2018 + (i as i32 % 5), 8.0 + i as f64)
        })
        .collect()
}

/// In-memory source that fails the next fetch with a network error when
/// told to, then recovers.
#[derive(Debug)]
pub struct FlakySource<R> {
    inner: InMemorySource<R>,
    fail_next: AtomicBool,
}

impl<R: Clone + std::fmt::Debug> FlakySource<R> {
    pub fn new(records: Vec<R>, schema: Arc<ListSchema<R>>) -> Self {
        Self {
            inner: InMemorySource::new(records, schema),
            fail_next: AtomicBool::new(false),
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl<R: Clone + std::fmt::Debug + Send + Sync> RecordSource<R>
    for FlakySource<R>
{
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
    ) -> RetrievalResult<PageResult<R>> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(RetrievalError::Network(
                "connection reset by peer".to_string(),
            ));
        }
        self.inner.fetch_page(criteria).await
    }
}
