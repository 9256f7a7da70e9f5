use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use crate::models::*;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Open a single connection for the lifetime of one request.
pub async fn connect(database_url: &str) -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .connect()
        .await
}

pub async fn close(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        tracing::warn!("Failed to close database connection: {}", err);
    }
}

/// Apply the embedded schema migrations.
pub async fn migrate(database_url: &str) -> Result<(), sqlx::migrate::MigrateError> {
    let mut conn = connect(database_url).await?;
    let result = MIGRATOR.run(&mut conn).await;
    close(conn).await;
    result
}

// Team queries
pub async fn get_all_teams(conn: &mut SqliteConnection) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT * FROM teams ORDER BY points DESC, (goals_for - goals_against) DESC"#
    )
    .fetch_all(conn)
    .await
}

pub async fn insert_team(conn: &mut SqliteConnection, team: &NewTeam) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"INSERT INTO teams (name, wins, losses, points, goals_for, goals_against, logo)
           VALUES (?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&team.name)
    .bind(team.wins)
    .bind(team.losses)
    .bind(team.points)
    .bind(team.goals_for)
    .bind(team.goals_against)
    .bind(&team.logo)
    .fetch_one(conn)
    .await
}

/// Replace every column of a team. `None` when the id does not exist.
pub async fn update_team(conn: &mut SqliteConnection, team: &TeamUpdate) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"UPDATE teams
           SET name = ?, wins = ?, losses = ?, points = ?, goals_for = ?, goals_against = ?, logo = ?
           WHERE id = ?
           RETURNING *"#
    )
    .bind(&team.name)
    .bind(team.wins)
    .bind(team.losses)
    .bind(team.points)
    .bind(team.goals_for)
    .bind(team.goals_against)
    .bind(&team.logo)
    .bind(team.id)
    .fetch_optional(conn)
    .await
}

pub async fn delete_team(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM teams WHERE id = ?"#)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

// Match queries
pub async fn get_all_matches(conn: &mut SqliteConnection) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"SELECT * FROM matches ORDER BY date DESC, time DESC"#
    )
    .fetch_all(conn)
    .await
}

pub async fn insert_match(conn: &mut SqliteConnection, game: &NewMatch) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"INSERT INTO matches (date, time, home_team, away_team, home_score, away_score, home_team_logo, away_team_logo)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&game.date)
    .bind(&game.time)
    .bind(&game.home_team)
    .bind(&game.away_team)
    .bind(game.home_score)
    .bind(game.away_score)
    .bind(&game.home_team_logo)
    .bind(&game.away_team_logo)
    .fetch_one(conn)
    .await
}

pub async fn delete_match(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM matches WHERE id = ?"#)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

// Social link queries
pub async fn get_all_socials(conn: &mut SqliteConnection) -> Result<Vec<SocialLink>, sqlx::Error> {
    sqlx::query_as::<_, SocialLink>(
        r#"SELECT * FROM social_links ORDER BY id"#
    )
    .fetch_all(conn)
    .await
}

pub async fn upsert_social(conn: &mut SqliteConnection, social: &SocialUpdate) -> Result<SocialLink, sqlx::Error> {
    sqlx::query_as::<_, SocialLink>(
        r#"INSERT INTO social_links (platform, url) VALUES (?, ?)
           ON CONFLICT (platform) DO UPDATE SET url = excluded.url
           RETURNING *"#
    )
    .bind(&social.platform)
    .bind(&social.url)
    .fetch_one(conn)
    .await
}

// Champion queries
pub async fn get_all_champions(conn: &mut SqliteConnection) -> Result<Vec<Champion>, sqlx::Error> {
    sqlx::query_as::<_, Champion>(
        r#"SELECT * FROM champions ORDER BY year DESC"#
    )
    .fetch_all(conn)
    .await
}

pub async fn insert_champion(conn: &mut SqliteConnection, champion: &NewChampion) -> Result<Champion, sqlx::Error> {
    sqlx::query_as::<_, Champion>(
        r#"INSERT INTO champions (year, team_name, logo) VALUES (?, ?, ?) RETURNING *"#
    )
    .bind(champion.year)
    .bind(&champion.team_name)
    .bind(&champion.logo)
    .fetch_one(conn)
    .await
}

pub async fn delete_champion(conn: &mut SqliteConnection, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM champions WHERE id = ?"#)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

// Settings queries
pub const RULES_KEY: &str = "rules";

pub async fn get_setting(conn: &mut SqliteConnection, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"SELECT value FROM settings WHERE key = ?"#
    )
    .bind(key)
    .fetch_optional(conn)
    .await
}

pub async fn upsert_setting(conn: &mut SqliteConnection, key: &str, value: &str) -> Result<Setting, sqlx::Error> {
    sqlx::query_as::<_, Setting>(
        r#"INSERT INTO settings (key, value) VALUES (?, ?)
           ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
           RETURNING *"#
    )
    .bind(key)
    .bind(value)
    .fetch_one(conn)
    .await
}
