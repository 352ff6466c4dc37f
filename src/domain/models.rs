use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type PlayerId = i32;
pub type TournamentId = i32;
pub type CourseId = i32;
pub type HoleId = i32;

/// Selects which par/distance column applies to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Player,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Player => "player",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "player" => Some(Role::Player),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub sex: Option<Sex>,
    pub quota: i32,
    pub active: bool,
    pub role: Role,
    pub fedex_points: i32,
    pub tournaments_played: i32,
    pub prize_money: f64,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub sex: Option<Sex>,
    pub quota: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    #[serde(default)]
    pub id: HoleId,
    #[serde(default)]
    pub course_id: CourseId,
    pub hole_number: i32,
    pub mens_distance: Option<i32>,
    pub mens_par: i32,
    pub mens_handicap: Option<i32>,
    pub ladies_distance: Option<i32>,
    pub ladies_par: i32,
    pub ladies_handicap: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub date: NaiveDate,
    pub course_id: CourseId,
    pub number_of_holes: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTournament {
    pub date: NaiveDate,
    pub course_id: CourseId,
    pub number_of_holes: i32,
}

/// One recorded hole joined with the hole number and the player's identity
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub player_id: PlayerId,
    pub hole_id: HoleId,
    pub hole_number: i32,
    pub score: i32,
    pub quota: i32,
    pub player_name: String,
    pub player_email: String,
    pub player_quota: i32,
}

/// Score entry payload; re-entering the same (tournament, player, hole) overwrites
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewScore {
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
    pub hole_id: HoleId,
    pub score: i32,
    pub quota: i32,
    pub foursome_group: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settings {
    pub tournament_fee_18_holes: i64,
    pub tournament_fee_9_holes: i64,
}

impl Settings {
    pub fn fee_for(&self, number_of_holes: i32) -> i64 {
        if number_of_holes == 18 {
            self.tournament_fee_18_holes
        } else {
            self.tournament_fee_9_holes
        }
    }
}
