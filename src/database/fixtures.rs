use chrono::NaiveDate;
use rusqlite::Connection;

use crate::domain::{Hole, NewPlayer, NewScore, PlayerId, SettingsPatch, Tournament};

use super::{courses, players, settings, setup, tournaments};

pub struct SeededLeague {
    pub tournament: Tournament,
    pub players: Vec<PlayerId>,
    pub holes: Vec<Hole>,
}

impl SeededLeague {
    pub fn score(&self, player: usize, hole_number: i32, strokes: i32, quota: i32) -> NewScore {
        NewScore {
            tournament_id: self.tournament.id,
            player_id: self.players[player],
            hole_id: self.holes[(hole_number - 1) as usize].id,
            score: strokes,
            quota,
            foursome_group: Some("A".to_string()),
        }
    }
}

/// Eighteen-hole course, an 18-hole tournament at $40 and three paid players.
pub fn seed_league(conn: &Connection) -> SeededLeague {
    seed_league_with(conn, 18)
}

/// Same league on the 18-hole course, but the tournament plays `number_of_holes`.
pub fn seed_league_with(conn: &Connection, number_of_holes: i32) -> SeededLeague {
    setup::reset_database(conn).unwrap();

    let patch = SettingsPatch {
        tournament_fee_18_holes: Some(40),
        tournament_fee_9_holes: Some(20),
    };
    settings::apply_patch(conn, &patch).unwrap();

    let course = courses::insert_course(conn, "Willow Creek", Some("1 Fairway Rd"), None).unwrap();
    let holes: Vec<Hole> = (1..=18)
        .map(|hole_number| Hole {
            id: 0,
            course_id: course.id,
            hole_number,
            mens_distance: None,
            mens_par: 4,
            mens_handicap: None,
            ladies_distance: None,
            ladies_par: 4,
            ladies_handicap: None,
        })
        .collect();
    let holes = courses::add_holes(conn, course.id, &holes).unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
    let tournament = tournaments::insert_tournament(conn, date, course.id, number_of_holes).unwrap();

    let players = [("Alice", 5), ("Bruno", 4), ("Chen", 6)]
        .iter()
        .map(|(name, quota)| {
            let player = NewPlayer {
                name: name.to_string(),
                email: format!("{}@club.test", name.to_lowercase()),
                phone: None,
                sex: None,
                quota: Some(*quota),
            };
            let id = players::insert_player(conn, &player).unwrap().id;
            tournaments::register_player(conn, tournament.id, id, true).unwrap();
            id
        })
        .collect();

    SeededLeague {
        tournament,
        players,
        holes,
    }
}
