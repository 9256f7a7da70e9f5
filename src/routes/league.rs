use std::str::FromStr;

use axum::{
    extract::{
        rejection::{QueryRejection, StringRejection},
        Query, State,
    },
    http::Method,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use sqlx::sqlite::SqliteConnection;
use crate::db;
use crate::error::ApiError;
use crate::models::*;
use crate::AppState;
use super::{parse_body, preflight};

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, X-Admin-Token";

// Query parameters selecting the resource and, for deletes, the row
#[derive(Deserialize)]
pub struct LeagueQuery {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Teams,
    Matches,
    Socials,
    Champions,
    Rules,
}

impl FromStr for Resource {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teams" => Ok(Resource::Teams),
            "matches" => Ok(Resource::Matches),
            "socials" => Ok(Resource::Socials),
            "champions" => Ok(Resource::Champions),
            "rules" => Ok(Resource::Rules),
            _ => Err(ApiError::InvalidPath),
        }
    }
}

/// One database operation, fully parsed before a connection is opened.
#[derive(Debug)]
pub enum Action {
    ListTeams,
    CreateTeam(NewTeam),
    ReplaceTeam(TeamUpdate),
    DeleteTeam(i64),
    ListMatches,
    CreateMatch(NewMatch),
    DeleteMatch(i64),
    ListSocials,
    UpsertSocial(SocialUpdate),
    ListChampions,
    CreateChampion(NewChampion),
    DeleteChampion(i64),
    GetRules,
    UpsertRules(RulesUpdate),
}

impl Action {
    /// A known resource with a method it does not support is a 405.
    pub fn parse(
        method: &Method,
        resource: Resource,
        id: Option<&str>,
        body: &str,
    ) -> Result<Self, ApiError> {
        let action = match (method, resource) {
            (&Method::GET, Resource::Teams) => Action::ListTeams,
            (&Method::GET, Resource::Matches) => Action::ListMatches,
            (&Method::GET, Resource::Socials) => Action::ListSocials,
            (&Method::GET, Resource::Champions) => Action::ListChampions,
            (&Method::GET, Resource::Rules) => Action::GetRules,

            (&Method::POST, Resource::Teams) => Action::CreateTeam(parse_body(body)?),
            (&Method::POST, Resource::Matches) => Action::CreateMatch(parse_body(body)?),
            (&Method::POST, Resource::Champions) => Action::CreateChampion(parse_body(body)?),

            (&Method::PUT, Resource::Teams) => Action::ReplaceTeam(parse_body(body)?),
            (&Method::PUT, Resource::Socials) => Action::UpsertSocial(parse_body(body)?),
            (&Method::PUT, Resource::Rules) => Action::UpsertRules(parse_body(body)?),

            (&Method::DELETE, Resource::Teams) => Action::DeleteTeam(parse_id(id)?),
            (&Method::DELETE, Resource::Matches) => Action::DeleteMatch(parse_id(id)?),
            (&Method::DELETE, Resource::Champions) => Action::DeleteChampion(parse_id(id)?),

            _ => return Err(ApiError::MethodNotAllowed),
        };

        Ok(action)
    }

    pub async fn execute(self, conn: &mut SqliteConnection) -> Result<Response, ApiError> {
        let response = match self {
            Action::ListTeams => Json(db::get_all_teams(conn).await?).into_response(),
            Action::CreateTeam(team) => Json(db::insert_team(conn, &team).await?).into_response(),
            Action::ReplaceTeam(team) => Json(db::update_team(conn, &team).await?).into_response(),
            Action::DeleteTeam(id) => {
                db::delete_team(conn, id).await?;
                deleted()
            }

            Action::ListMatches => Json(db::get_all_matches(conn).await?).into_response(),
            Action::CreateMatch(game) => Json(db::insert_match(conn, &game).await?).into_response(),
            Action::DeleteMatch(id) => {
                db::delete_match(conn, id).await?;
                deleted()
            }

            Action::ListSocials => Json(db::get_all_socials(conn).await?).into_response(),
            Action::UpsertSocial(social) => Json(db::upsert_social(conn, &social).await?).into_response(),

            Action::ListChampions => Json(db::get_all_champions(conn).await?).into_response(),
            Action::CreateChampion(champion) => {
                Json(db::insert_champion(conn, &champion).await?).into_response()
            }
            Action::DeleteChampion(id) => {
                db::delete_champion(conn, id).await?;
                deleted()
            }

            Action::GetRules => {
                let rules = db::get_setting(conn, db::RULES_KEY).await?.unwrap_or_default();
                Json(Rules { rules }).into_response()
            }
            Action::UpsertRules(update) => {
                Json(db::upsert_setting(conn, db::RULES_KEY, &update.rules).await?).into_response()
            }
        };

        Ok(response)
    }
}

fn parse_id(id: Option<&str>) -> Result<i64, ApiError> {
    let raw = id.ok_or_else(|| ApiError::BadRequest("Missing id parameter".to_string()))?;
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid id {:?}", raw)))
}

fn deleted() -> Response {
    Json(Deleted { deleted: true }).into_response()
}

// ANY /api?path=<resource> - League data CRUD
pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<LeagueQuery>, QueryRejection>,
    body: Result<String, StringRejection>,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(preflight(ALLOWED_METHODS, ALLOWED_HEADERS));
    }
    if ![Method::GET, Method::POST, Method::PUT, Method::DELETE].contains(&method) {
        return Err(ApiError::MethodNotAllowed);
    }

    let Query(params) = query?;
    let body = body?;

    let database_url = state
        .config
        .database_url
        .as_deref()
        .ok_or(ApiError::NotConfigured)?;

    let resource: Resource = params.path.as_deref().unwrap_or_default().parse()?;
    let action = Action::parse(&method, resource, params.id.as_deref(), &body)?;
    tracing::debug!(%method, ?resource, "Dispatching league request");

    let mut conn = db::connect(database_url).await?;
    let result = action.execute(&mut conn).await;
    db::close(conn).await;

    result
}
