use serde::{Deserialize, Serialize};

use crate::domain::RULES;
use crate::engine::{DiceSource, GameController, RoundHistory};

use super::dto::{build_session_view, SessionViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущее состояние сессии.
    GetSession,

    /// События текущего раунда.
    GetRoundHistory,

    /// Текст правил.
    GetRules,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Session(SessionViewDto),
    RoundHistory(RoundHistory),
    Rules(String),
}

pub fn run_query<S: DiceSource>(controller: &GameController<S>, query: &Query) -> QueryResponse {
    match query {
        Query::GetSession => QueryResponse::Session(build_session_view(controller)),
        Query::GetRoundHistory => {
            QueryResponse::RoundHistory(controller.engine().history().clone())
        }
        Query::GetRules => QueryResponse::Rules(RULES.to_string()),
    }
}
