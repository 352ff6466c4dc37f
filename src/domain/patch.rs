use rusqlite::types::Value;
use serde::Deserialize;

use super::models::{Role, Sex};

/// Column name paired with the value to assign
pub type Assignment = (&'static str, Value);

/// Partial update of a player; only fields that are present get assigned
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<Sex>,
    pub quota: Option<i32>,
    pub fedex_points: Option<i32>,
    pub tournaments_played: Option<i32>,
    pub prize_money: Option<f64>,
    pub active: Option<bool>,
    pub role: Option<Role>,
}

impl PlayerPatch {
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut out = Vec::new();
        push_text(&mut out, "name", self.name.as_deref());
        push_text(&mut out, "email", self.email.as_deref());
        push_text(&mut out, "phone", self.phone.as_deref());
        push_text(&mut out, "sex", self.sex.as_ref().map(Sex::as_str));
        push_integer(&mut out, "quota", self.quota.map(i64::from));
        push_integer(&mut out, "fedex_points", self.fedex_points.map(i64::from));
        push_integer(
            &mut out,
            "tournaments_played",
            self.tournaments_played.map(i64::from),
        );
        if let Some(prize_money) = self.prize_money {
            out.push(("prize_money", Value::Real(prize_money)));
        }
        push_integer(&mut out, "active", self.active.map(i64::from));
        push_text(&mut out, "role", self.role.as_ref().map(Role::as_str));
        out
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsPatch {
    pub tournament_fee_18_holes: Option<i64>,
    pub tournament_fee_9_holes: Option<i64>,
}

impl SettingsPatch {
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut out = Vec::new();
        push_integer(&mut out, "tournament_fee_18_holes", self.tournament_fee_18_holes);
        push_integer(&mut out, "tournament_fee_9_holes", self.tournament_fee_9_holes);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

fn push_text(out: &mut Vec<Assignment>, column: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        out.push((column, Value::Text(value.to_string())));
    }
}

fn push_integer(out: &mut Vec<Assignment>, column: &'static str, value: Option<i64>) {
    if let Some(value) = value {
        out.push((column, Value::Integer(value)));
    }
}

/// Renders `col_a = ?1, col_b = ?2`; the row key binds as the next parameter
pub fn set_clause(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .enumerate()
        .map(|(idx, (column, _))| format!("{} = ?{}", column, idx + 1))
        .collect::<Vec<_>>()
        .join(", ")
}
