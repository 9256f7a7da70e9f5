use serde::{Serialize, Deserialize};

/// League standings row from the teams table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub points: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub logo: String,
}

/// Fixture or result from the matches table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Match {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub home_team_logo: String,
    pub away_team_logo: String,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct SocialLink {
    pub id: i64,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Champion {
    pub id: i64,
    pub year: i64,
    pub team_name: String,
    pub logo: String,
}

/// Key/value row from the settings table
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

/// Response wrapper for the rules text
#[derive(Debug, Serialize)]
pub struct Rules {
    pub rules: String,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: bool,
}

// Request bodies. The admin frontend sends camelCase keys.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub goals_for: i64,
    #[serde(default)]
    pub goals_against: i64,
    #[serde(default)]
    pub logo: String,
}

/// Full replacement of a team row; every stat must be present
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub id: i64,
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub points: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub date: String,
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_score: Option<i64>,
    #[serde(default)]
    pub away_score: Option<i64>,
    #[serde(default)]
    pub home_team_logo: String,
    #[serde(default)]
    pub away_team_logo: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChampion {
    pub year: i64,
    pub team_name: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Deserialize)]
pub struct SocialUpdate {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct RulesUpdate {
    pub rules: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}
