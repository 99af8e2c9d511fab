//! Validates a failing and a passing employee record and prints the results.
//!
//! Run with `cargo run -p validate --example employee`. The aggregator emits
//! a `trace` event for every failing `all` call.

use validate::prelude::*;

struct Education {
    duration: u32,
    school: String,
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

struct Employee {
    name: String,
    age: i32,
    salary: f64,
    education: Education,
    skills: Vec<String>,
}

impl Validate for Employee {
    fn validate(&self) -> ValidationResult<'_> {
        all([
            one_of("name", self.name.as_str(), &["Zeus", "Hera"]),
            one_of("age", self.age, &[35, 55]),
            min("age", self.age, 10),
            self.education.validate(),
            max("salary", self.salary, 123.456),
            min_max_len("skills", &self.skills, 1, 3),
        ])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let bob = Employee {
        name: "Bob".into(),
        age: 101,
        salary: 256.99,
        education: Education {
            duration: 75,
            school: "Berkeley".into(),
        },
        skills: Vec::new(),
    };

    match bob.validate() {
        Ok(()) => println!("bob: valid"),
        Err(err) => {
            println!("bob: {err}");
            println!("{}", serde_json::to_string_pretty(&err.to_json_value()?)?);
        }
    }

    let hera = Employee {
        name: "Hera".into(),
        age: 55,
        salary: 79.0,
        education: Education {
            duration: 75,
            school: "KAIST".into(),
        },
        skills: vec!["rust".into()],
    };
    println!("hera: valid = {}", hera.is_valid());

    Ok(())
}
