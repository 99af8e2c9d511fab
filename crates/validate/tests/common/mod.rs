//! Shared fixtures: a nested Employee / Education / Color structure.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use validate::prelude::*;

pub fn at(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

#[derive(Debug, Clone)]
pub struct Color(pub String);

impl Validate for Color {
    fn validate(&self) -> ValidationResult<'_> {
        match self.0.as_str() {
            "red" | "green" | "blue" => Ok(()),
            other => Err(ValidationError::message(format!(
                "color wrong value({other}), expected([red, green, blue])"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Education {
    pub duration: u32,
    pub school: String,
}

impl Validate for Education {
    fn validate(&self) -> ValidationResult<'_> {
        if self.duration % 17 == 5 {
            return Err(ValidationError::message("my special error"));
        }
        all([
            min("", self.duration, 10),
            one_of("", self.school.as_str(), &["KAIST", "Stanford"]),
        ])
    }
}

#[derive(Debug, Clone)]
pub struct Employee {
    pub name: String,
    pub age: i32,
    pub color: Color,
    pub education: Education,
    pub salary: f64,
    pub birthday: DateTime<Utc>,
    pub vacation_start: DateTime<Utc>,
    pub skills: Vec<String>,
}

impl Validate for Employee {
    fn validate(&self) -> ValidationResult<'_> {
        all([
            one_of("name", self.name.as_str(), &["Zeus", "Hera"]),
            one_of("age", self.age, &[35, 55]),
            min("age", self.age, 10),
            self.color.validate(),
            self.education.validate(),
            max("salary", self.salary, 123.456),
            after("birthday", self.birthday, at(1984)),
            before("vacation_start", self.vacation_start, at(2024)),
            min_max_len("skills", &self.skills, 1, 3),
        ])
    }
}

/// Fails name, age membership, color, education, salary, birthday,
/// vacation start and skills; passes the age minimum.
pub fn bob() -> Employee {
    Employee {
        name: "Bob".into(),
        age: 101,
        color: Color("orange".into()),
        education: Education {
            duration: 75,
            school: "Berkeley".into(),
        },
        salary: 256.99,
        birthday: at(1984),
        vacation_start: at(2025),
        skills: Vec::new(),
    }
}

/// Passes every check.
pub fn hera() -> Employee {
    Employee {
        name: "Hera".into(),
        age: 55,
        color: Color("red".into()),
        education: Education {
            duration: 75,
            school: "KAIST".into(),
        },
        salary: 79.0,
        birthday: at(2022),
        vacation_start: at(2023),
        skills: vec!["rust".into()],
    }
}
