// src/domain/ticket_sequence_model.rs

//! チケット採番カウンタの行
//!
//! 連番は常にこの行の行ロック付き読み取り→加算→書き戻しで払い出す。
//! プロセス内にカウンタを持たないため、複数サーバープロセスでも重複しない。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// サポートチケット用カウンタ行の名前
pub const TICKET_SEQUENCE_NAME: &str = "support_tickets";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ticket_sequences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub last_value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
