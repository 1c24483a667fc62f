//! Post mapping and repository.
//!
//! Timestamps are stored as ISO-8601 text: `post_at` as
//! `YYYY-MM-DD HH:MM:SS[.fff]`, `post_date` as `YYYY-MM-DD` and `post_time`
//! as `HH:MM:SS[.fff]`.

use crate::model::post::Post;
use crate::repo::mapping::{text_or_null, ColumnMapping, Entity, RowDecoder, TableMapping};
use crate::repo::sqlite::SqliteRepository;
use crate::repo::RepoResult;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::Value;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

const USER_ID_COLUMN: ColumnMapping = ColumnMapping::required("user_id", "user_id");
const TITLE_COLUMN: ColumnMapping = ColumnMapping::optional("title", "title");
const CONTENT_COLUMN: ColumnMapping = ColumnMapping::required("content", "content");
const POST_AT_COLUMN: ColumnMapping = ColumnMapping::required("post_at", "post_at");
const POST_DATE_COLUMN: ColumnMapping = ColumnMapping::required("post_date", "post_date");
const POST_TIME_COLUMN: ColumnMapping = ColumnMapping::required("post_time", "post_time");

impl Entity for Post {
    const MAPPING: TableMapping = TableMapping {
        table: "post",
        id_column: "id",
        columns: &[
            USER_ID_COLUMN,
            TITLE_COLUMN,
            CONTENT_COLUMN,
            POST_AT_COLUMN,
            POST_DATE_COLUMN,
            POST_TIME_COLUMN,
        ],
    };

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn encode(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.user_id),
            text_or_null(self.title.as_deref()),
            Value::Text(self.content.clone()),
            Value::Text(self.post_at.format(DATE_TIME_FORMAT).to_string()),
            Value::Text(self.post_date.format(DATE_FORMAT).to_string()),
            Value::Text(self.post_time.format(TIME_FORMAT).to_string()),
        ]
    }

    fn decode(row: &RowDecoder<'_, '_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.id()?),
            user_id: row.required(USER_ID_COLUMN.field)?,
            title: row.optional(TITLE_COLUMN.field)?,
            content: row.required(CONTENT_COLUMN.field)?,
            post_at: row.parsed(POST_AT_COLUMN.field, parse_date_time)?,
            post_date: row.parsed(POST_DATE_COLUMN.field, |value| {
                NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
            })?,
            post_time: row.parsed(POST_TIME_COLUMN.field, |value| {
                NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
            })?,
        })
    }
}

/// SQLite-backed post repository. Posts only need the shared contract.
pub type SqlitePostRepository<'conn> = SqliteRepository<'conn, Post>;

fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
